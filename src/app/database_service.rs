//! Persistence layer for products and recipes.
//!
//! Thin typed facade over a Postgres pool. Tables are created on connect so a
//! fresh database works without a separate migration step. The counter bump
//! in [`DatabaseService::bump_used_counters`] is a single store-evaluated
//! UPDATE so concurrent cook requests never lose increments.

use crate::domain::model::{Product, Recipe};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use std::collections::HashMap;

const PRODUCT_COLUMNS: &str = "id, product_name, product_was_used_counter";
const RECIPE_COLUMNS: &str = "id, recipe_name, product_list";

pub struct DatabaseService {
    pool: PgPool,
}

impl DatabaseService {
    /// Connects to Postgres and ensures both entity tables exist.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                product_name TEXT NOT NULL,
                product_was_used_counter BIGINT NOT NULL DEFAULT 0
                    CHECK (product_was_used_counter >= 0)
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS recipes (
                id BIGSERIAL PRIMARY KEY,
                recipe_name TEXT NOT NULL,
                product_list JSONB NOT NULL DEFAULT '{}'::jsonb
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn list_products(&self) -> sqlx::Result<Vec<Product>> {
        sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_product(&self, id: i64) -> sqlx::Result<Option<Product>> {
        sqlx::query_as(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Inserts a product; the usage counter starts at the column default (0).
    pub async fn insert_product(&self, product_name: &str) -> sqlx::Result<Product> {
        sqlx::query_as(&format!(
            "INSERT INTO products (product_name) VALUES ($1) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(product_name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_product_name(&self, id: i64, product_name: &str) -> sqlx::Result<Product> {
        sqlx::query_as(&format!(
            "UPDATE products SET product_name = $2 WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id)
        .bind(product_name)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_recipes(&self) -> sqlx::Result<Vec<Recipe>> {
        sqlx::query_as(&format!("SELECT {RECIPE_COLUMNS} FROM recipes ORDER BY id"))
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_recipe(&self, id: i64) -> sqlx::Result<Option<Recipe>> {
        sqlx::query_as(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn insert_recipe(
        &self,
        recipe_name: &str,
        product_list: &HashMap<String, String>,
    ) -> sqlx::Result<Recipe> {
        sqlx::query_as(&format!(
            "INSERT INTO recipes (recipe_name, product_list) VALUES ($1, $2)
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(recipe_name)
        .bind(Json(product_list))
        .fetch_one(&self.pool)
        .await
    }

    /// Partial update: omitted fields keep their stored values.
    pub async fn update_recipe(
        &self,
        id: i64,
        recipe_name: Option<&str>,
        product_list: Option<&HashMap<String, String>>,
    ) -> sqlx::Result<Recipe> {
        sqlx::query_as(&format!(
            "UPDATE recipes
             SET recipe_name = COALESCE($2, recipe_name),
                 product_list = COALESCE($3, product_list)
             WHERE id = $1
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(id)
        .bind(recipe_name)
        .bind(product_list.map(Json))
        .fetch_one(&self.pool)
        .await
    }

    /// Recipes that either lack the product key entirely or hold it with one
    /// of the given weight strings.
    pub async fn recipes_without_product(
        &self,
        product_name: &str,
        allowed_weights: &[String],
    ) -> sqlx::Result<Vec<Recipe>> {
        sqlx::query_as(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipes
             WHERE product_list ->> $1 IS NULL OR product_list ->> $1 = ANY($2)
             ORDER BY id"
        ))
        .bind(product_name)
        .bind(allowed_weights)
        .fetch_all(&self.pool)
        .await
    }

    /// Increments the usage counter of every product named in `product_names`
    /// with one bulk, store-evaluated expression. Returns the affected count.
    pub async fn bump_used_counters(&self, product_names: &[String]) -> sqlx::Result<u64> {
        let result = sqlx::query(
            "UPDATE products
             SET product_was_used_counter = product_was_used_counter + 1
             WHERE product_name = ANY($1)",
        )
        .bind(product_names)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Inserts or overwrites one `product name -> weight` entry in a recipe's
    /// product map and returns the updated row.
    pub async fn set_recipe_product_weight(
        &self,
        recipe_id: i64,
        product_name: &str,
        weight: &str,
    ) -> sqlx::Result<Recipe> {
        sqlx::query_as(&format!(
            "UPDATE recipes
             SET product_list = product_list || jsonb_build_object($2::text, $3::text)
             WHERE id = $1
             RETURNING {RECIPE_COLUMNS}"
        ))
        .bind(recipe_id)
        .bind(product_name)
        .bind(weight)
        .fetch_one(&self.pool)
        .await
    }
}
