use crate::domain::model::{validate_name, Product};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{AppState, UpdateProductRequest};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = [Product])
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.db.list_products().await?))
}

/// Create runs two validation phases: the structural schema over the raw
/// submission, then the field-level name check. Update (below) runs only the
/// field-level check; the asymmetry mirrors the documented behavior.
#[utoipa::path(
    post,
    path = "/api/products",
    request_body(content = Object, description = "{\"product_name\": \"...\"}"),
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Shape or validation failure", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::WrongFormat(e.to_string()))?;

    let report = state.schemas.product.validate(&payload);
    if !report.passed() {
        return Err(ApiError::WrongFormat(report.to_string()));
    }

    // The shape check guarantees a string here.
    let product_name = payload["product_name"].as_str().unwrap_or_default();
    validate_name(product_name, &state.limits).map_err(|e| ApiError::Validation(e.to_string()))?;

    let product = state.db.insert_product(product_name).await?;
    tracing::info!(id = product.id, name = %product.product_name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Validation failure", body = crate::transport::http::types::MessageResponse),
        (status = 404, description = "Unknown product id", body = crate::transport::http::types::MessageResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::WrongFormat(e.to_string()))?;

    if state.db.find_product(id).await?.is_none() {
        return Err(ApiError::NotFound {
            what: "Product",
            id,
        });
    }

    validate_name(&request.product_name, &state.limits)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let product = state
        .db
        .update_product_name(id, &request.product_name)
        .await?;
    Ok(Json(product))
}
