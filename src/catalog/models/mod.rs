// Models module - contains Column, ColumnProps and Relation

pub mod column;
pub mod column_props;
pub mod relation;

pub use column::{Column, CompositeColumn, MapColumn, MultiSetColumn, ScalarColumn};
pub use column_props::ColumnProps;
pub use relation::Relation;
