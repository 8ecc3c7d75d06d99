//! Repository for the `locations` table.

use sqlx::PgPool;

use crate::models::location::{Location, UpsertLocation};

const COLUMNS: &str = "id, source_id, name, location_type, address, city, country, is_active, \
                       created_at, updated_at";

/// Provides upsert and lookup operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a location, or overwrite the one with the same name.
    pub async fn upsert(pool: &PgPool, input: &UpsertLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (source_id, name, location_type, address, city, country)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (name) DO UPDATE SET
                source_id = EXCLUDED.source_id,
                location_type = EXCLUDED.location_type,
                address = EXCLUDED.address,
                city = EXCLUDED.city,
                country = EXCLUDED.country,
                is_active = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.source_id)
            .bind(&input.name)
            .bind(&input.location_type)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.country)
            .fetch_one(pool)
            .await
    }

    /// The first location ever created, if any.
    pub async fn first(pool: &PgPool) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Location>(&query)
            .fetch_optional(pool)
            .await
    }
}
