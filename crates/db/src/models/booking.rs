//! Booking model and DTOs.

use laberinto_core::types::{DbId, Pesos, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `bookings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Booking {
    pub id: DbId,
    pub source_id: Option<String>,
    pub organizer_id: DbId,
    pub event_id: DbId,
    pub total_participants: i32,
    pub adults_count: i32,
    pub children_count: i32,
    pub non_drinkers_count: i32,
    pub subtotal: Pesos,
    pub total_amount: Pesos,
    pub paid_amount: Pesos,
    pub status: String,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    /// Airtable fields with no column of their own.
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBooking {
    pub source_id: Option<String>,
    pub organizer_id: DbId,
    pub event_id: DbId,
    pub total_participants: i32,
    pub adults_count: i32,
    pub children_count: i32,
    pub non_drinkers_count: i32,
    pub subtotal: Pesos,
    pub total_amount: Pesos,
    pub paid_amount: Pesos,
    pub status: String,
    pub special_requests: Option<String>,
    pub notes: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
