//! Domain entities of the cooking book and their validation rules.

pub mod schemas;
pub mod validate;

pub use schemas::{product_schema, recipe_schema, SchemaSet};
pub use validate::{validate_name, NameError, TextLimits, NAME_MIN_CHARS};

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use std::collections::HashMap;
use utoipa::ToSchema;

/// An ingredient that recipes reference by name.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    /// How many times a recipe using this product has been cooked.
    pub product_was_used_counter: i64,
}

/// A recipe with its embedded product-name -> weight mapping.
///
/// The mapping is free-form JSON: keys are matched against
/// `Product::product_name` at query time, with no referential constraint.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub recipe_name: String,
    #[schema(value_type = Object)]
    pub product_list: Json<HashMap<String, String>>,
}

/// Weight strings treated as "running low" on a product: 1 through 10 grams.
pub fn allowed_weights() -> Vec<String> {
    (1..=10).map(|grams| format!("{grams}g")).collect()
}
