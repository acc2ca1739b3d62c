use super::column::Column;
use serde::{Deserialize, Serialize};

/// A catalog table or view with its resolved columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Relation {
    pub fn new(name: String, columns: Vec<Column>) -> Self {
        Self { name, columns }
    }

    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| !c.is_hidden()).collect()
    }

    pub fn hidden_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_hidden()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Relation name followed by one tooltip line per visible column.
    pub fn tooltip(&self) -> String {
        let mut lines = vec![self.name.clone()];
        lines.extend(self.visible_columns().iter().map(|c| c.tooltip_line()));
        lines.join("\n")
    }
}
