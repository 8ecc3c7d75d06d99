//! Repository for the `sales` and `sale_items` tables.

use laberinto_core::types::DbId;
use sqlx::PgPool;

use crate::models::sale::{CreateSale, CreateSaleItem, Sale, SaleItem};

const COLUMNS: &str = "id, source_id, customer_id, total_amount, sale_date, status, notes, \
                       created_at, updated_at";

const ITEM_COLUMNS: &str = "id, source_id, sale_id, wine_id, quantity, unit_price, total_price, \
                            created_at, updated_at";

/// Provides insert and lookup operations for sales and their items.
pub struct SaleRepo;

impl SaleRepo {
    /// Insert a new sale, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSale) -> Result<Sale, sqlx::Error> {
        let query = format!(
            "INSERT INTO sales (source_id, customer_id, total_amount, sale_date, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sale>(&query)
            .bind(&input.source_id)
            .bind(input.customer_id)
            .bind(input.total_amount)
            .bind(input.sale_date)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Insert a line item for an existing sale.
    pub async fn create_item(
        pool: &PgPool,
        input: &CreateSaleItem,
    ) -> Result<SaleItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO sale_items (source_id, sale_id, wine_id, quantity, unit_price, total_price)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, SaleItem>(&query)
            .bind(&input.source_id)
            .bind(input.sale_id)
            .bind(input.wine_id)
            .bind(input.quantity)
            .bind(input.unit_price)
            .bind(input.total_price)
            .fetch_one(pool)
            .await
    }

    /// List the sales of a customer, oldest first.
    pub async fn list_by_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<Sale>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sales WHERE customer_id = $1 ORDER BY id");
        sqlx::query_as::<_, Sale>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// List the line items of a sale.
    pub async fn list_items(pool: &PgPool, sale_id: DbId) -> Result<Vec<SaleItem>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM sale_items WHERE sale_id = $1 ORDER BY id");
        sqlx::query_as::<_, SaleItem>(&query)
            .bind(sale_id)
            .fetch_all(pool)
            .await
    }

    /// Count all sales.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sales")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
