use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::parsed_type::quote_comment;

/// Size Flink prints for unbounded character types (`STRING` is `VARCHAR(2147483647)`).
pub const MAX_VARCHAR_LENGTH: u32 = 2_147_483_647;

static MAX_LENGTH_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\(\s*{}\s*\)", MAX_VARCHAR_LENGTH)).unwrap());

const COMPOSITE_KEYWORDS: [&str; 4] = ["ROW", "MAP", "ARRAY", "MULTISET"];

/// Column metadata shared by every column variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarColumn {
    /// Owning relation, or `relation.column` path for nested columns
    pub relation_name: String,
    pub name: String,
    /// Type text as supplied by the catalog
    pub full_data_type: String,
    /// Innermost non-array type, without its nullability/comment suffix
    pub data_type: String,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub array_dimensions: u32,
    #[serde(default)]
    pub is_array_member_nullable: bool,
    #[serde(default)]
    pub is_generated: bool,
    #[serde(default)]
    pub is_persisted: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_key_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_key: Option<String>,
}

impl ScalarColumn {
    pub fn new(relation_name: String, name: String, data_type: String) -> Self {
        Self {
            relation_name,
            name,
            full_data_type: data_type.clone(),
            data_type,
            is_nullable: false,
            is_array: false,
            array_dimensions: 0,
            is_array_member_nullable: false,
            is_generated: false,
            is_persisted: false,
            is_hidden: false,
            distribution_key_number: None,
            comment: None,
            metadata_key: None,
        }
    }

    /// Qualified name, `relation.column`.
    pub fn id(&self) -> String {
        format!("{}.{}", self.relation_name, self.name)
    }

    pub fn simple_data_type(&self) -> String {
        simplify_data_type(&self.data_type)
    }

    /// `simple_data_type` wrapped in one `ARRAY<...>` per array dimension.
    pub fn simple_type_with_array(&self) -> String {
        let mut rendered = self.simple_data_type();
        for _ in 0..self.array_dimensions {
            rendered = format!("ARRAY<{}>", rendered);
        }
        rendered
    }

    /// One-line summary: `name: TYPE [NOT] NULL [DISTKEY(n)] [GENERATED] [METADATA('key')]`.
    pub fn tooltip_line(&self) -> String {
        let mut line = format!(
            "{}: {} {}",
            self.name,
            self.simple_type_with_array(),
            if self.is_nullable { "NULL" } else { "NOT NULL" }
        );
        if let Some(position) = self.distribution_key_number {
            line.push_str(&format!(" DISTKEY({})", position));
        }
        if self.is_generated {
            line.push_str(" GENERATED");
        }
        if let Some(key) = &self.metadata_key {
            line.push_str(&format!(" METADATA({})", quote_comment(key)));
        }
        line
    }

    pub fn is_metadata_column(&self) -> bool {
        self.metadata_key.is_some()
    }
}

/// `ROW` column with its fields as ordered child columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeColumn {
    #[serde(flatten)]
    pub column: ScalarColumn,
    pub columns: Vec<Column>,
}

/// `MAP` column with synthetic `key` and `value` children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapColumn {
    #[serde(flatten)]
    pub column: ScalarColumn,
    pub key: Box<Column>,
    pub value: Box<Column>,
}

/// `MULTISET` column with a single synthetic `element` child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiSetColumn {
    #[serde(flatten)]
    pub column: ScalarColumn,
    pub element: Box<Column>,
}

/// A catalog column, resolved from its type signature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Column {
    Scalar(ScalarColumn),
    Composite(CompositeColumn),
    Map(MapColumn),
    MultiSet(MultiSetColumn),
}

impl Column {
    /// Metadata common to all variants.
    pub fn info(&self) -> &ScalarColumn {
        match self {
            Column::Scalar(column) => column,
            Column::Composite(composite) => &composite.column,
            Column::Map(map) => &map.column,
            Column::MultiSet(multiset) => &multiset.column,
        }
    }

    pub fn id(&self) -> String {
        self.info().id()
    }

    pub fn name(&self) -> &str {
        &self.info().name
    }

    pub fn is_nullable(&self) -> bool {
        self.info().is_nullable
    }

    pub fn is_hidden(&self) -> bool {
        self.info().is_hidden
    }

    pub fn comment(&self) -> Option<&str> {
        self.info().comment.as_deref()
    }

    pub fn simple_data_type(&self) -> String {
        match self {
            Column::Scalar(column) => column.simple_data_type(),
            Column::Composite(_) => "ROW".to_string(),
            Column::Map(_) => "MAP".to_string(),
            Column::MultiSet(_) => "MULTISET".to_string(),
        }
    }

    pub fn simple_type_with_array(&self) -> String {
        let mut rendered = self.simple_data_type();
        for _ in 0..self.info().array_dimensions {
            rendered = format!("ARRAY<{}>", rendered);
        }
        rendered
    }

    pub fn tooltip_line(&self) -> String {
        self.info().tooltip_line()
    }

    /// Direct children in declaration order; empty for scalar columns.
    pub fn children(&self) -> Vec<&Column> {
        match self {
            Column::Scalar(_) => Vec::new(),
            Column::Composite(composite) => composite.columns.iter().collect(),
            Column::Map(map) => vec![map.key.as_ref(), map.value.as_ref()],
            Column::MultiSet(multiset) => vec![multiset.element.as_ref()],
        }
    }

    pub fn child(&self, name: &str) -> Option<&Column> {
        self.children().into_iter().find(|c| c.name() == name)
    }
}

/// Reduce a type to its display form.
///
/// Composite types collapse to their keyword; anything else loses the
/// unbounded-length marker and backticks, keeping other arguments.
pub fn simplify_data_type(data_type: &str) -> String {
    let trimmed = data_type.trim();
    let upper = trimmed.to_ascii_uppercase();
    for keyword in COMPOSITE_KEYWORDS {
        if upper.starts_with(keyword) && upper[keyword.len()..].starts_with('<') {
            return keyword.to_string();
        }
    }

    MAX_LENGTH_MARKER.replace_all(trimmed, "").replace('`', "")
}
