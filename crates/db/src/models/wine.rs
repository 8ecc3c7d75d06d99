//! Wine entity model and DTOs.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `wines` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Wine {
    pub id: DbId,
    pub source_id: Option<String>,
    pub code: String,
    pub name: String,
    pub slug: String,
    pub category_id: DbId,
    pub region_id: DbId,
    pub producer: String,
    pub base_price: Pesos,
    pub description: Option<String>,
    pub tasting_notes: Option<String>,
    pub pairing_notes: Option<String>,
    pub barcode: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or overwriting a wine.
///
/// The existing row is matched by `code` first, then by `slug`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertWine {
    pub source_id: Option<String>,
    pub code: String,
    pub name: String,
    pub slug: String,
    pub category_id: DbId,
    pub region_id: DbId,
    pub producer: String,
    pub base_price: Pesos,
    pub description: Option<String>,
    pub tasting_notes: Option<String>,
    pub pairing_notes: Option<String>,
    pub barcode: Option<String>,
}
