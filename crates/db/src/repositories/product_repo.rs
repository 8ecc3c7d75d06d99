//! Repository for the `products` table.

use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str =
    "id, source_id, name, description, price, category, is_active, created_at, updated_at";

/// Provides insert operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (source_id, name, description, price, category)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.source_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }
}
