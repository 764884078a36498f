//! Declared shapes for inbound create payloads.
//!
//! Built once at startup from the configured text limits and injected through
//! the application state; the schemas hold no mutable state.

use super::validate::TextLimits;
use crate::domain::schema::{FieldRules, Schema};

/// The per-entity schemas checked before persistence.
pub struct SchemaSet {
    pub product: Schema,
    pub recipe: Schema,
}

impl SchemaSet {
    pub fn new(limits: &TextLimits) -> Self {
        Self {
            product: product_schema(limits),
            recipe: recipe_schema(limits),
        }
    }
}

fn name_rules(limits: &TextLimits) -> FieldRules {
    FieldRules::text()
        .non_empty()
        .min_chars(limits.min)
        .max_chars(limits.max)
}

/// Shape of a product create payload: `{"product_name": "..."}`.
pub fn product_schema(limits: &TextLimits) -> Schema {
    Schema::new().field("product_name", name_rules(limits))
}

/// Shape of a recipe create payload: `{"recipe_name": "...",
/// "product_list": {"<product name>": "<weight>"}}`.
///
/// The product map must be non-empty on create; every key and value must be a
/// non-empty string of at least the configured minimum length.
pub fn recipe_schema(limits: &TextLimits) -> Schema {
    Schema::new().field("recipe_name", name_rules(limits)).field(
        "product_list",
        FieldRules::mapping()
            .non_empty()
            .keys(FieldRules::text().non_empty().min_chars(limits.min))
            .values(FieldRules::text().non_empty().min_chars(limits.min)),
    )
}
