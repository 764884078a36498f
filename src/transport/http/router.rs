use crate::domain::model::{Product, Recipe};
use crate::transport::http::handlers::{health, products, recipes};
use crate::transport::http::types::{
    AppState, MessageResponse, UpdateProductRequest, UpdateRecipeRequest,
};
use axum::routing::{get, put};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::create_product_handler,
        products::update_product_handler,
        recipes::list_recipes_handler,
        recipes::create_recipe_handler,
        recipes::update_recipe_handler,
        recipes::without_product_handler,
        recipes::cook_recipe_handler,
        recipes::add_product_handler
    ),
    components(schemas(
        Product,
        Recipe,
        MessageResponse,
        UpdateProductRequest,
        UpdateRecipeRequest
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route("/api/products/:id", put(products::update_product_handler))
        .route(
            "/api/recipes",
            get(recipes::list_recipes_handler).post(recipes::create_recipe_handler),
        )
        .route("/api/recipes/:id", put(recipes::update_recipe_handler))
        .route(
            "/api/recipes/without-product",
            get(recipes::without_product_handler),
        )
        .route("/api/recipes/cook", get(recipes::cook_recipe_handler))
        .route("/api/recipes/add-product", get(recipes::add_product_handler))
        .with_state(app_state)
}
