//! Scheduled event model and DTOs.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: DbId,
    pub source_id: Option<String>,
    pub title: String,
    pub experience_id: DbId,
    pub location_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub max_capacity: i32,
    pub status: String,
    pub price_override: Option<Pesos>,
    /// Airtable fields with no column of their own.
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event. Events have no natural key and are always inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateEvent {
    pub source_id: Option<String>,
    pub title: String,
    pub experience_id: DbId,
    pub location_id: DbId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub max_capacity: i32,
    pub status: String,
    pub price_override: Option<Pesos>,
    pub metadata: Option<serde_json::Value>,
}
