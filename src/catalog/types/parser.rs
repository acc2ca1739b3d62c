//! Recursive-descent parser for Flink SQL type signatures.
//!
//! Handles the signatures Flink's system catalog prints for column types:
//! primitives with arguments (`DECIMAL(10, 2)`, `TIMESTAMP(3) WITH LOCAL TIME ZONE`),
//! `ARRAY<T>`, ``ROW<`f` T, ...>``, `MAP<K, V>` and `MULTISET<T>`, each optionally
//! followed by `NULL` / `NOT NULL` and a single-quoted comment.

use super::error::ParseError;
use super::parsed_type::{ParsedType, RowField};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Deepest type nesting accepted; each `ARRAY<`, `ROW<`, `MAP<` or `MULTISET<` is one level.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser over a single type signature.
///
/// Holds a cursor (byte offset) into the trimmed input; one instance per signature.
pub struct TypeParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> TypeParser<'a> {
    /// Create a parser over `input`; surrounding whitespace is ignored.
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.trim(),
            pos: 0,
            depth: 0,
        }
    }

    /// Parse a complete type signature.
    pub fn parse(input: &str) -> Result<ParsedType, ParseError> {
        let result = TypeParser::new(input).parse_signature();
        match &result {
            Ok(parsed) => debug!(
                "[TypeParser] Parsed '{}' as {}",
                input,
                parsed.keyword().unwrap_or("primitive")
            ),
            Err(e) => debug!("[TypeParser] Failed to parse '{}': {}", input, e),
        }
        result
    }

    /// Parse the whole input as one type; trailing tokens are an error.
    pub fn parse_signature(&mut self) -> Result<ParsedType, ParseError> {
        if self.input.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parsed = self.parse_type()?;
        self.skip_whitespace();
        if !self.at_end() {
            return Err(ParseError::unexpected(
                self.pos,
                "end of input",
                self.describe_next(),
            ));
        }
        Ok(parsed)
    }

    /// Parse one type together with its nullability marker and comment.
    fn parse_type(&mut self) -> Result<ParsedType, ParseError> {
        self.skip_whitespace();
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                position: self.pos,
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let result = self.parse_nested_type();
        self.depth -= 1;
        result
    }

    fn parse_nested_type(&mut self) -> Result<ParsedType, ParseError> {
        let keyword = self.peek_word().map(|word| word.to_ascii_uppercase());

        let mut parsed = match keyword.as_deref() {
            Some(kw @ ("ROW" | "MAP" | "ARRAY" | "MULTISET"))
                if self.input[self.pos + kw.len()..].starts_with('<') =>
            {
                // keyword plus '<'
                self.pos += kw.len() + 1;
                match kw {
                    "ROW" => self.parse_row_body()?,
                    "MAP" => self.parse_map_body()?,
                    "ARRAY" => self.parse_array_body()?,
                    _ => self.parse_multiset_body()?,
                }
            }
            _ => self.parse_primitive()?,
        };

        let nullable = self.parse_nullability()?;
        let comment = self.parse_comment()?;
        parsed.set_suffix(nullable, comment);
        Ok(parsed)
    }

    fn parse_array_body(&mut self) -> Result<ParsedType, ParseError> {
        let element = self.parse_type()?;
        self.expect_char('>')?;
        Ok(ParsedType::Array {
            element: Box::new(element),
            nullable: false,
            comment: None,
        })
    }

    fn parse_multiset_body(&mut self) -> Result<ParsedType, ParseError> {
        let element = self.parse_type()?;
        self.expect_char('>')?;
        Ok(ParsedType::MultiSet {
            element: Box::new(element),
            nullable: false,
            comment: None,
        })
    }

    fn parse_map_body(&mut self) -> Result<ParsedType, ParseError> {
        let key = self.parse_type()?;
        self.expect_char(',')?;
        let value = self.parse_type()?;
        self.expect_char('>')?;
        Ok(ParsedType::Map {
            key: Box::new(key),
            value: Box::new(value),
            nullable: false,
            comment: None,
        })
    }

    fn parse_row_body(&mut self) -> Result<ParsedType, ParseError> {
        let mut fields = Vec::new();

        self.skip_whitespace();
        if self.peek_char() == Some('>') {
            self.pos += 1;
        } else {
            loop {
                fields.push(self.parse_row_field()?);
                self.skip_whitespace();
                match self.peek_char() {
                    Some(',') => self.pos += 1,
                    Some('>') => {
                        self.pos += 1;
                        break;
                    }
                    Some(_) => {
                        return Err(ParseError::unexpected(
                            self.pos,
                            "',' or '>'",
                            self.describe_next(),
                        ));
                    }
                    None => return Err(ParseError::end(self.pos, "',' or '>'")),
                }
            }
        }

        Ok(ParsedType::Row {
            fields,
            nullable: false,
            comment: None,
        })
    }

    fn parse_row_field(&mut self) -> Result<RowField, ParseError> {
        self.skip_whitespace();
        let name = self.parse_identifier()?;
        let field_type = self.parse_type()?;
        Ok(RowField::new(name, field_type))
    }

    /// Parse a backtick-quoted identifier; a doubled backtick is a literal one.
    fn parse_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek_char() {
            Some('`') => {}
            Some(_) => {
                return Err(ParseError::unexpected(
                    self.pos,
                    "quoted field name",
                    self.describe_next(),
                ));
            }
            None => return Err(ParseError::end(self.pos, "quoted field name")),
        }

        let start = self.pos;
        self.pos += 1;
        let mut name = String::new();
        loop {
            let rest = &self.input[self.pos..];
            let Some(offset) = rest.find('`') else {
                return Err(ParseError::UnterminatedIdentifier { position: start });
            };
            name.push_str(&rest[..offset]);
            self.pos += offset + 1;
            if self.peek_char() == Some('`') {
                name.push('`');
                self.pos += 1;
            } else {
                return Ok(name);
            }
        }
    }

    /// Consume a primitive type verbatim.
    ///
    /// Stops at a top-level `,`, `>` or `'`, or where a `NULL` / `NOT NULL`
    /// marker starts. Text inside parentheses (including quoted strings) is
    /// never a boundary.
    fn parse_primitive(&mut self) -> Result<ParsedType, ParseError> {
        self.skip_whitespace();
        let start = self.pos;
        let mut depth = 0usize;
        let mut open_paren = start;

        while let Some(ch) = self.peek_char() {
            if depth > 0 {
                match ch {
                    '(' => depth += 1,
                    ')' => depth -= 1,
                    '\'' => {
                        self.read_quoted()?;
                        continue;
                    }
                    _ => {}
                }
                self.pos += ch.len_utf8();
                continue;
            }

            match ch {
                ',' | '>' | '\'' => break,
                '<' => {
                    return Err(ParseError::unexpected(
                        self.pos,
                        "primitive type",
                        format!("'{}'", ch),
                    ));
                }
                ')' => return Err(ParseError::UnbalancedParenthesis { position: self.pos }),
                '(' => {
                    depth = 1;
                    open_paren = self.pos;
                    self.pos += 1;
                }
                c if is_word_char(c) => {
                    let word_len = self.peek_word().map_or(0, str::len);
                    if self.pos > start && self.at_suffix_marker() {
                        break;
                    }
                    let is_null_type = self.pos == start
                        && self
                            .peek_word()
                            .is_some_and(|word| word.eq_ignore_ascii_case("NULL"));
                    self.pos += word_len;
                    if is_null_type {
                        break;
                    }
                }
                c => self.pos += c.len_utf8(),
            }
        }

        if depth > 0 {
            return Err(ParseError::UnbalancedParenthesis {
                position: open_paren,
            });
        }

        let raw = self.input[start..self.pos].trim();
        if raw.is_empty() {
            return Err(if self.at_end() {
                ParseError::end(self.pos, "type")
            } else {
                ParseError::unexpected(self.pos, "type", self.describe_next())
            });
        }

        let text = if raw.contains('\'') {
            raw.to_string()
        } else {
            WHITESPACE_RUN.replace_all(raw, " ").into_owned()
        };
        Ok(ParsedType::primitive(text))
    }

    /// Whether the cursor sits on a `NULL` or `NOT NULL` following whitespace or `)`.
    fn at_suffix_marker(&self) -> bool {
        let after_boundary = self.input[..self.pos]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_whitespace() || c == ')');
        if !after_boundary {
            return false;
        }

        let Some(word) = self.peek_word() else {
            return false;
        };
        if word.eq_ignore_ascii_case("NULL") {
            return true;
        }
        if word.eq_ignore_ascii_case("NOT") {
            let rest = self.input[self.pos + word.len()..].trim_start();
            let next: String = rest.chars().take_while(|c| is_word_char(*c)).collect();
            return next.eq_ignore_ascii_case("NULL");
        }
        false
    }

    /// `NULL` yields true, `NOT NULL` yields false, anything else leaves the
    /// cursor in place and yields the default (not nullable).
    fn parse_nullability(&mut self) -> Result<bool, ParseError> {
        let checkpoint = self.pos;
        self.skip_whitespace();
        let word = self.peek_word().map(|w| w.to_ascii_uppercase());
        match word.as_deref() {
            Some("NULL") => {
                self.pos += 4;
                Ok(true)
            }
            Some("NOT") => {
                self.pos += 3;
                self.skip_whitespace();
                match self.peek_word() {
                    Some(next) if next.eq_ignore_ascii_case("NULL") => {
                        self.pos += 4;
                        Ok(false)
                    }
                    Some(_) => Err(ParseError::unexpected(
                        self.pos,
                        "NULL",
                        self.describe_next(),
                    )),
                    None if self.at_end() => Err(ParseError::end(self.pos, "NULL")),
                    None => Err(ParseError::unexpected(
                        self.pos,
                        "NULL",
                        self.describe_next(),
                    )),
                }
            }
            _ => {
                self.pos = checkpoint;
                Ok(false)
            }
        }
    }

    fn parse_comment(&mut self) -> Result<Option<String>, ParseError> {
        let checkpoint = self.pos;
        self.skip_whitespace();
        if self.peek_char() == Some('\'') {
            return self.read_quoted().map(Some);
        }
        self.pos = checkpoint;
        Ok(None)
    }

    /// Read a single-quoted string at the cursor, returning it unescaped.
    fn read_quoted(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        // opening quote
        self.pos += 1;
        let mut text = String::new();
        loop {
            let rest = &self.input[self.pos..];
            let Some(offset) = rest.find('\'') else {
                return Err(ParseError::UnterminatedString { position: start });
            };
            text.push_str(&rest[..offset]);
            self.pos += offset + 1;
            if self.peek_char() == Some('\'') {
                text.push('\'');
                self.pos += 1;
            } else {
                return Ok(text);
            }
        }
    }

    fn expect_char(&mut self, expected: char) -> Result<(), ParseError> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.pos += ch.len_utf8();
                Ok(())
            }
            Some(_) => Err(ParseError::unexpected(
                self.pos,
                &format!("'{}'", expected),
                self.describe_next(),
            )),
            None => Err(ParseError::end(self.pos, &format!("'{}'", expected))),
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Bare word (`[A-Za-z0-9_]+`) at the cursor.
    fn peek_word(&self) -> Option<&'a str> {
        let input: &'a str = self.input;
        let rest = &input[self.pos..];
        let len = rest
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map_or(rest.len(), |(idx, _)| idx);
        if len == 0 { None } else { Some(&rest[..len]) }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn describe_next(&self) -> String {
        if let Some(word) = self.peek_word() {
            return word.to_string();
        }
        match self.peek_char() {
            Some(ch) => format!("'{}'", ch),
            None => "end of input".to_string(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
