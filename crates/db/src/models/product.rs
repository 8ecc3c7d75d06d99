//! Product model and DTOs.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: DbId,
    pub source_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Pesos,
    pub category: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateProduct {
    pub source_id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub price: Pesos,
    pub category: String,
}
