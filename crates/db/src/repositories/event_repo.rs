//! Repository for the `events` table.

use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event};

const COLUMNS: &str = "id, source_id, title, experience_id, location_id, start_time, end_time, \
                       max_capacity, status, price_override, metadata, created_at, \
                       updated_at";

/// Provides insert and lookup operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (source_id, title, experience_id, location_id, start_time, end_time,
                 max_capacity, status, price_override, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.source_id)
            .bind(&input.title)
            .bind(input.experience_id)
            .bind(input.location_id)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.max_capacity)
            .bind(&input.status)
            .bind(input.price_override)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// The event with the earliest start time, if any.
    pub async fn earliest(pool: &PgPool) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY start_time, id LIMIT 1");
        sqlx::query_as::<_, Event>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Count all events.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
