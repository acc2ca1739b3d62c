// Types module - Flink type signature grammar

pub mod error;
pub mod parsed_type;
pub mod parser;

pub use error::ParseError;
pub use parsed_type::{ParsedType, RowField};
pub use parser::{MAX_NESTING_DEPTH, TypeParser};
