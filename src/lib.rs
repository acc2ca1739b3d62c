// Catalog module: type grammar, column models and factory
pub mod catalog;

// Environment-driven runtime configuration
pub mod config;

// Re-export catalog modules at crate root (so services can use crate::models, crate::types)
pub use catalog::models;
pub use catalog::services;
pub use catalog::types;

pub use catalog::models::{Column, ColumnProps, Relation};
pub use catalog::services::{build_column, try_build_column};
pub use catalog::types::{ParseError, ParsedType, TypeParser};
