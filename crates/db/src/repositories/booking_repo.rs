//! Repository for the `bookings` table.

use sqlx::PgPool;

use crate::models::booking::{Booking, CreateBooking};

const COLUMNS: &str = "id, source_id, organizer_id, event_id, total_participants, adults_count, \
                       children_count, non_drinkers_count, subtotal, total_amount, paid_amount, \
                       status, special_requests, notes, metadata, created_at, updated_at";

/// Provides insert operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a new booking, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings
                (source_id, organizer_id, event_id, total_participants, adults_count,
                 children_count, non_drinkers_count, subtotal, total_amount, paid_amount,
                 status, special_requests, notes, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.source_id)
            .bind(input.organizer_id)
            .bind(input.event_id)
            .bind(input.total_participants)
            .bind(input.adults_count)
            .bind(input.children_count)
            .bind(input.non_drinkers_count)
            .bind(input.subtotal)
            .bind(input.total_amount)
            .bind(input.paid_amount)
            .bind(&input.status)
            .bind(&input.special_requests)
            .bind(&input.notes)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }
}
