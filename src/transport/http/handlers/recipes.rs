use crate::domain::model::{allowed_weights, validate_name, Recipe};
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{
    AddProductParams, AppState, CookRecipeParams, MessageResponse, UpdateRecipeRequest,
    WithoutProductParams,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value as JsonValue;
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/api/recipes",
    responses(
        (status = 200, description = "All recipes", body = [Recipe])
    )
)]
pub async fn list_recipes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(state.db.list_recipes().await?))
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    request_body(content = Object, description = "{\"recipe_name\": \"...\", \"product_list\": {\"<product>\": \"<weight>\"}}"),
    responses(
        (status = 201, description = "Recipe created", body = Recipe),
        (status = 400, description = "Shape or validation failure", body = MessageResponse)
    )
)]
pub async fn create_recipe_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::WrongFormat(e.to_string()))?;

    let report = state.schemas.recipe.validate(&payload);
    if !report.passed() {
        return Err(ApiError::WrongFormat(report.to_string()));
    }

    // Both fields are shape-checked above.
    let recipe_name = payload["recipe_name"].as_str().unwrap_or_default();
    let product_list: HashMap<String, String> =
        serde_json::from_value(payload["product_list"].clone())
            .map_err(|e| ApiError::WrongFormat(e.to_string()))?;

    validate_name(recipe_name, &state.limits).map_err(|e| ApiError::Validation(e.to_string()))?;

    let recipe = state.db.insert_recipe(recipe_name, &product_list).await?;
    tracing::info!(id = recipe.id, name = %recipe.recipe_name, "recipe created");
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// No shape pre-check here, matching the create/update asymmetry of the
/// product handlers. Omitting `product_list` leaves the stored map as is.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    params(("id" = i64, Path, description = "Recipe id")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 400, description = "Validation failure", body = MessageResponse),
        (status = 404, description = "Unknown recipe id", body = MessageResponse)
    )
)]
pub async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateRecipeRequest>, JsonRejection>,
) -> Result<Json<Recipe>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::WrongFormat(e.to_string()))?;

    if state.db.find_recipe(id).await?.is_none() {
        return Err(ApiError::NotFound { what: "Recipe", id });
    }

    validate_name(&request.recipe_name, &state.limits)
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let recipe = state
        .db
        .update_recipe(id, Some(&request.recipe_name), request.product_list.as_ref())
        .await?;
    Ok(Json(recipe))
}

#[utoipa::path(
    get,
    path = "/api/recipes/without-product",
    params(WithoutProductParams),
    responses(
        (status = 200, description = "Recipes missing the product, or holding 1-10 grams of it", body = [Recipe]),
        (status = 400, description = "Missing product_id", body = MessageResponse),
        (status = 404, description = "Unknown product id", body = MessageResponse)
    )
)]
pub async fn without_product_handler(
    State(state): State<AppState>,
    Query(params): Query<WithoutProductParams>,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let product_id = params
        .product_id
        .ok_or(ApiError::MissingParam("product_id"))?;

    let product = state
        .db
        .find_product(product_id)
        .await?
        .ok_or(ApiError::NotFound {
            what: "Product",
            id: product_id,
        })?;

    let recipes = state
        .db
        .recipes_without_product(&product.product_name, &allowed_weights())
        .await?;
    Ok(Json(recipes))
}

#[utoipa::path(
    get,
    path = "/api/recipes/cook",
    params(CookRecipeParams),
    responses(
        (status = 200, description = "Usage counters bumped for every product in the recipe", body = MessageResponse),
        (status = 400, description = "Missing recipe_id", body = MessageResponse),
        (status = 404, description = "Unknown recipe id", body = MessageResponse)
    )
)]
pub async fn cook_recipe_handler(
    State(state): State<AppState>,
    Query(params): Query<CookRecipeParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let recipe_id = params.recipe_id.ok_or(ApiError::MissingParam("recipe_id"))?;

    let recipe = state
        .db
        .find_recipe(recipe_id)
        .await?
        .ok_or(ApiError::NotFound {
            what: "Recipe",
            id: recipe_id,
        })?;

    let product_names: Vec<String> = recipe.product_list.0.keys().cloned().collect();
    let bumped = state.db.bump_used_counters(&product_names).await?;
    tracing::info!(recipe_id, bumped, "recipe cooked");

    Ok(Json(MessageResponse::new(
        "Recipe was updated successfully",
    )))
}

/// Parameters are checked in the order weight, recipe_id, product_id, before
/// any store access.
#[utoipa::path(
    get,
    path = "/api/recipes/add-product",
    params(AddProductParams),
    responses(
        (status = 200, description = "Weight set for the product in the recipe", body = MessageResponse),
        (status = 400, description = "Missing parameter", body = MessageResponse),
        (status = 404, description = "Unknown product or recipe id", body = MessageResponse)
    )
)]
pub async fn add_product_handler(
    State(state): State<AppState>,
    Query(params): Query<AddProductParams>,
) -> Result<Json<MessageResponse>, ApiError> {
    let weight = params.weight.ok_or(ApiError::MissingParam("weight"))?;
    let recipe_id = params.recipe_id.ok_or(ApiError::MissingParam("recipe_id"))?;
    let product_id = params
        .product_id
        .ok_or(ApiError::MissingParam("product_id"))?;

    let product = state
        .db
        .find_product(product_id)
        .await?
        .ok_or(ApiError::NotFound {
            what: "Product",
            id: product_id,
        })?;

    if state.db.find_recipe(recipe_id).await?.is_none() {
        return Err(ApiError::NotFound {
            what: "Recipe",
            id: recipe_id,
        });
    }

    state
        .db
        .set_recipe_product_weight(recipe_id, &product.product_name, &weight)
        .await?;

    Ok(Json(MessageResponse::new(
        "Recipe was updated successfully",
    )))
}
