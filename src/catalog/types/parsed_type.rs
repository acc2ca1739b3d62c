//! Parsed representation of a Flink type signature.
//!
//! A `ParsedType` is the tree the type parser produces: primitives, arrays,
//! rows, maps and multisets, each with its own nullability and optional
//! comment. Rendering a node with `Display` yields its canonical signature,
//! which parses back to an equivalent node.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed Flink type signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedType {
    /// Atomic type, text retains size/precision arguments (`DECIMAL(10, 2)`)
    Primitive {
        text: String,
        nullable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `ARRAY<T>`; `nullable` is the array's own flag, members carry theirs on `element`
    Array {
        element: Box<ParsedType>,
        nullable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `ROW<`name` T, ...>`
    Row {
        fields: Vec<RowField>,
        nullable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `MAP<K, V>`
    Map {
        key: Box<ParsedType>,
        value: Box<ParsedType>,
        nullable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
    /// `MULTISET<T>`
    MultiSet {
        element: Box<ParsedType>,
        nullable: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

/// A named field of a `ROW` type.
///
/// `nullable` and `comment` mirror the suffix parsed after the field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowField {
    pub name: String,
    pub field_type: ParsedType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub nullable: bool,
}

impl RowField {
    /// Build a field, taking `nullable` and `comment` from the type's suffix.
    pub fn new(name: impl Into<String>, field_type: ParsedType) -> Self {
        Self {
            name: name.into(),
            comment: field_type.comment().map(str::to_string),
            nullable: field_type.nullable(),
            field_type,
        }
    }

    /// Field type rendered without its own nullability/comment suffix.
    ///
    /// Rendered on demand; parsing never builds type text for nested nodes.
    pub fn type_text(&self) -> String {
        self.field_type.type_text()
    }
}

impl ParsedType {
    pub fn primitive(text: impl Into<String>) -> Self {
        ParsedType::Primitive {
            text: text.into(),
            nullable: false,
            comment: None,
        }
    }

    /// Whether the node itself is nullable.
    pub fn nullable(&self) -> bool {
        match self {
            ParsedType::Primitive { nullable, .. }
            | ParsedType::Array { nullable, .. }
            | ParsedType::Row { nullable, .. }
            | ParsedType::Map { nullable, .. }
            | ParsedType::MultiSet { nullable, .. } => *nullable,
        }
    }

    pub fn comment(&self) -> Option<&str> {
        match self {
            ParsedType::Primitive { comment, .. }
            | ParsedType::Array { comment, .. }
            | ParsedType::Row { comment, .. }
            | ParsedType::Map { comment, .. }
            | ParsedType::MultiSet { comment, .. } => comment.as_deref(),
        }
    }

    /// Apply a parsed nullability marker and comment to this node.
    pub fn set_suffix(&mut self, is_nullable: bool, text: Option<String>) {
        match self {
            ParsedType::Primitive {
                nullable, comment, ..
            }
            | ParsedType::Array {
                nullable, comment, ..
            }
            | ParsedType::Row {
                nullable, comment, ..
            }
            | ParsedType::Map {
                nullable, comment, ..
            }
            | ParsedType::MultiSet {
                nullable, comment, ..
            } => {
                *nullable = is_nullable;
                *comment = text;
            }
        }
    }

    /// Keyword naming the node's kind (`ROW`, `ARRAY`, ...), `None` for primitives.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            ParsedType::Primitive { .. } => None,
            ParsedType::Array { .. } => Some("ARRAY"),
            ParsedType::Row { .. } => Some("ROW"),
            ParsedType::Map { .. } => Some("MAP"),
            ParsedType::MultiSet { .. } => Some("MULTISET"),
        }
    }

    /// Canonical signature without this node's own nullability and comment.
    ///
    /// Nested nodes are rendered in full, so `ARRAY<INT NULL> NOT NULL`
    /// becomes `ARRAY<INT NULL>`.
    pub fn type_text(&self) -> String {
        match self {
            ParsedType::Primitive { text, .. } => text.clone(),
            ParsedType::Array { element, .. } => format!("ARRAY<{}>", element),
            ParsedType::Row { fields, .. } => {
                let rendered: Vec<String> = fields
                    .iter()
                    .map(|field| format!("{} {}", quote_identifier(&field.name), field.field_type))
                    .collect();
                format!("ROW<{}>", rendered.join(", "))
            }
            ParsedType::Map { key, value, .. } => format!("MAP<{}, {}>", key, value),
            ParsedType::MultiSet { element, .. } => format!("MULTISET<{}>", element),
        }
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_text())?;
        if self.nullable() {
            write!(f, " NULL")?;
        }
        if let Some(comment) = self.comment() {
            write!(f, " {}", quote_comment(comment))?;
        }
        Ok(())
    }
}

/// Wrap a field name in backticks, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Wrap a comment in single quotes, doubling embedded quotes.
pub fn quote_comment(comment: &str) -> String {
    format!("'{}'", comment.replace('\'', "''"))
}
