//! Wine catalog reference data: regions and categories.

use laberinto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `wine_regions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WineRegion {
    pub id: DbId,
    pub name: String,
    pub country: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `wine_categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WineCategory {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
