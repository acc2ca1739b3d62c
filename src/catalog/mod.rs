// Catalog module organization
pub mod models;
pub mod services;
pub mod types;
