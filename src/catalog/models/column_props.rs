use serde::{Deserialize, Serialize};

/// A column row as returned by the catalog's column listing.
///
/// `is_nullable` and `comment` are caller overrides: when present they win
/// over whatever the type signature says.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnProps {
    pub relation_name: String,
    pub name: String,
    pub full_data_type: String,
    #[serde(default)]
    pub is_generated: bool,
    #[serde(default)]
    pub is_persisted: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_key_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_nullable: Option<bool>,
}

impl ColumnProps {
    pub fn new(
        relation_name: impl Into<String>,
        name: impl Into<String>,
        full_data_type: impl Into<String>,
    ) -> Self {
        Self {
            relation_name: relation_name.into(),
            name: name.into(),
            full_data_type: full_data_type.into(),
            ..Default::default()
        }
    }
}
