//! Parse error types for Flink type signatures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a Flink type signature.
///
/// Positions are byte offsets into the trimmed input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseError {
    /// Input was empty after trimming
    #[error("Empty type signature")]
    EmptyInput,
    /// A token other than the expected one was found
    #[error("Expected {expected} at position {position}, found {found}")]
    UnexpectedToken {
        position: usize,
        expected: String,
        found: String,
    },
    /// Input ended while a token was still required
    #[error("Unexpected end of input at position {position}, expected {expected}")]
    UnexpectedEnd { position: usize, expected: String },
    /// A quoted comment or string was not closed
    #[error("Unterminated string literal starting at position {position}")]
    UnterminatedString { position: usize },
    /// A backtick-quoted identifier was not closed
    #[error("Unterminated identifier starting at position {position}")]
    UnterminatedIdentifier { position: usize },
    /// Parentheses inside a primitive type do not balance
    #[error("Unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },
    /// Composite types nest deeper than the parser accepts
    #[error("Type nesting exceeds {limit} levels at position {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl ParseError {
    /// Byte offset the error refers to.
    pub fn position(&self) -> usize {
        match self {
            ParseError::EmptyInput => 0,
            ParseError::UnexpectedToken { position, .. }
            | ParseError::UnexpectedEnd { position, .. }
            | ParseError::UnterminatedString { position }
            | ParseError::UnterminatedIdentifier { position }
            | ParseError::UnbalancedParenthesis { position }
            | ParseError::NestingTooDeep { position, .. } => *position,
        }
    }

    pub(crate) fn unexpected(position: usize, expected: &str, found: impl Into<String>) -> Self {
        ParseError::UnexpectedToken {
            position,
            expected: expected.to_string(),
            found: found.into(),
        }
    }

    pub(crate) fn end(position: usize, expected: &str) -> Self {
        ParseError::UnexpectedEnd {
            position,
            expected: expected.to_string(),
        }
    }
}
