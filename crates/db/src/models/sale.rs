//! Wine sale and sale line item models.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sales` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sale {
    pub id: DbId,
    pub source_id: Option<String>,
    pub customer_id: DbId,
    pub total_amount: Pesos,
    pub sale_date: Timestamp,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sale.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSale {
    pub source_id: Option<String>,
    pub customer_id: DbId,
    pub total_amount: Pesos,
    pub sale_date: Timestamp,
    pub status: String,
    pub notes: Option<String>,
}

/// A row from the `sale_items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SaleItem {
    pub id: DbId,
    pub source_id: Option<String>,
    pub sale_id: DbId,
    pub wine_id: DbId,
    pub quantity: i32,
    pub unit_price: Pesos,
    pub total_price: Pesos,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a sale line item.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSaleItem {
    pub source_id: Option<String>,
    pub sale_id: DbId,
    pub wine_id: DbId,
    pub quantity: i32,
    pub unit_price: Pesos,
    pub total_price: Pesos,
}
