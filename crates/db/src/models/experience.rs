//! Experience entity model and DTOs.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `experiences` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Experience {
    pub id: DbId,
    pub source_id: Option<String>,
    pub name: String,
    pub slug: String,
    /// One of `laberinto_core::vocabulary::ExperienceType::ALL`.
    pub experience_type: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub base_price: Pesos,
    pub location_id: DbId,
    /// Airtable fields with no column of their own.
    pub metadata: Option<serde_json::Value>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or overwriting an experience, keyed by `slug`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertExperience {
    pub source_id: Option<String>,
    pub name: String,
    pub slug: String,
    pub experience_type: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub max_participants: i32,
    pub base_price: Pesos,
    pub location_id: DbId,
    pub metadata: Option<serde_json::Value>,
}
