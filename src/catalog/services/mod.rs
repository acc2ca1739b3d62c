//! Services module - column construction and catalog loading.

pub mod catalog_loader;
pub mod column_factory;

pub use catalog_loader::{CatalogLoader, RowFormat};
pub use column_factory::{build_column, build_relation, try_build_column};
