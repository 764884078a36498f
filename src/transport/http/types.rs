use crate::app::database_service::DatabaseService;
use crate::domain::model::{SchemaSet, TextLimits};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

/// Shared, immutable per-process state. The schemas and limits are built once
/// at startup; nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseService>,
    pub schemas: Arc<SchemaSet>,
    pub limits: TextLimits,
}

/// Uniform `{"message": ...}` body used for every error and for the
/// action endpoints' success replies.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateProductRequest {
    pub product_name: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateRecipeRequest {
    pub recipe_name: String,
    /// Omitted -> the stored product map is left unchanged.
    #[schema(value_type = Object)]
    pub product_list: Option<HashMap<String, String>>,
}

// Query parameters arrive as Options so a missing one produces the
// descriptive 400 from the error responder, before any store access.

#[derive(Deserialize, Debug, IntoParams)]
pub struct WithoutProductParams {
    pub product_id: Option<i64>,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct CookRecipeParams {
    pub recipe_id: Option<i64>,
}

#[derive(Deserialize, Debug, IntoParams)]
pub struct AddProductParams {
    pub weight: Option<String>,
    pub recipe_id: Option<i64>,
    pub product_id: Option<i64>,
}
