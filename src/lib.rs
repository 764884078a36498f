pub mod app;
pub mod domain;
pub mod infra;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::database_service::DatabaseService;
pub use domain::model::{allowed_weights, Product, Recipe, SchemaSet, TextLimits};
pub use domain::schema::{FieldRules, Schema, ValidationReport};
