//! Location entity model and DTOs.

use laberinto_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `locations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Location {
    pub id: DbId,
    pub source_id: Option<String>,
    pub name: String,
    pub location_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or overwriting a location, keyed by `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertLocation {
    pub source_id: Option<String>,
    pub name: String,
    pub location_type: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: String,
}
