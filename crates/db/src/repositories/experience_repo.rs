//! Repository for the `experiences` table.

use sqlx::PgPool;

use crate::models::experience::{Experience, UpsertExperience};

const COLUMNS: &str = "id, source_id, name, slug, experience_type, description, \
                       duration_minutes, max_participants, base_price, location_id, metadata, \
                       is_active, created_at, updated_at";

/// Provides upsert and lookup operations for experiences.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// Insert an experience, or overwrite the one with the same slug.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences
                (source_id, name, slug, experience_type, description, duration_minutes,
                 max_participants, base_price, location_id, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             ON CONFLICT (slug) DO UPDATE SET
                source_id = EXCLUDED.source_id,
                name = EXCLUDED.name,
                experience_type = EXCLUDED.experience_type,
                description = EXCLUDED.description,
                duration_minutes = EXCLUDED.duration_minutes,
                max_participants = EXCLUDED.max_participants,
                base_price = EXCLUDED.base_price,
                location_id = EXCLUDED.location_id,
                metadata = EXCLUDED.metadata,
                is_active = true
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.source_id)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(&input.experience_type)
            .bind(&input.description)
            .bind(input.duration_minutes)
            .bind(input.max_participants)
            .bind(input.base_price)
            .bind(input.location_id)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// The first experience ever created, if any.
    pub async fn first(pool: &PgPool) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Experience>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Find the experience imported from the given Airtable record.
    pub async fn find_by_source_id(
        pool: &PgPool,
        source_id: &str,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM experiences WHERE source_id = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(source_id)
            .fetch_optional(pool)
            .await
    }

    /// Count all experiences.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM experiences")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
