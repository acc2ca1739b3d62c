//! Catalog row loader for reading column listings from JSON or YAML documents.

use super::column_factory::build_relation;
use crate::models::{ColumnProps, Relation};
use anyhow::{Context, Result, bail};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Document format of a catalog row file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowFormat {
    Json,
    Yaml,
}

impl RowFormat {
    /// Pick the format from the file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(RowFormat::Json),
            Some("yaml") | Some("yml") => Ok(RowFormat::Yaml),
            _ => bail!(
                "Unsupported catalog file extension for {} (expected .json, .yaml or .yml)",
                path.display()
            ),
        }
    }
}

/// Loader for catalog column rows.
#[derive(Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse a document holding a sequence of catalog rows.
    pub fn parse_rows(&self, content: &str, format: RowFormat) -> Result<Vec<ColumnProps>> {
        let rows: Vec<ColumnProps> = match format {
            RowFormat::Json => {
                serde_json::from_str(content).context("Failed to parse catalog rows as JSON")?
            }
            RowFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse catalog rows as YAML")?
            }
        };
        Ok(rows)
    }

    /// Read and parse a catalog row file.
    pub fn load_rows(&self, path: &Path) -> Result<Vec<ColumnProps>> {
        let format = RowFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let rows = self.parse_rows(&content, format)?;
        info!(
            "[CatalogLoader] Loaded {} catalog rows from {}",
            rows.len(),
            path.display()
        );
        Ok(rows)
    }

    /// Read a catalog row file and build one relation per relation name.
    pub fn load_relations(&self, path: &Path) -> Result<Vec<Relation>> {
        let rows = self.load_rows(path)?;
        Ok(self.group_relations(&rows))
    }

    /// Group rows by relation name, keeping first-seen relation order and row order.
    pub fn group_relations(&self, rows: &[ColumnProps]) -> Vec<Relation> {
        let mut order: Vec<String> = Vec::new();
        let mut grouped: HashMap<String, Vec<ColumnProps>> = HashMap::new();

        for row in rows {
            grouped
                .entry(row.relation_name.clone())
                .or_insert_with(|| {
                    order.push(row.relation_name.clone());
                    Vec::new()
                })
                .push(row.clone());
        }

        order
            .iter()
            .map(|name| build_relation(name, grouped.get(name).map_or(&[][..], Vec::as_slice)))
            .collect()
    }
}
