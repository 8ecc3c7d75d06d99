//! Repository for the `wines` table.

use laberinto_core::types::DbId;
use sqlx::PgPool;

use crate::models::wine::{UpsertWine, Wine};

/// Column list shared across queries.
const COLUMNS: &str = "id, source_id, code, name, slug, category_id, region_id, producer, \
                       base_price, description, tasting_notes, pairing_notes, barcode, \
                       is_active, created_at, updated_at";

/// Provides upsert and lookup operations for wines.
pub struct WineRepo;

impl WineRepo {
    /// Insert a wine, or overwrite the wine it collides with.
    ///
    /// A row with the same `code` is preferred; failing that, a row with
    /// the same `slug` is overwritten (last write wins when two names
    /// normalise to one slug).
    pub async fn upsert(pool: &PgPool, input: &UpsertWine) -> Result<Wine, sqlx::Error> {
        match Self::find_upsert_target(pool, &input.code, &input.slug).await? {
            Some(id) => Self::update(pool, id, input).await,
            None => Self::create(pool, input).await,
        }
    }

    /// Id of the row an upsert with this code and slug would overwrite.
    async fn find_upsert_target(
        pool: &PgPool,
        code: &str,
        slug: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM wines
             WHERE code = $1 OR slug = $2
             ORDER BY (code = $1) DESC, id
             LIMIT 1",
        )
        .bind(code)
        .bind(slug)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Insert a new wine, returning the created row.
    pub async fn create(pool: &PgPool, input: &UpsertWine) -> Result<Wine, sqlx::Error> {
        let query = format!(
            "INSERT INTO wines
                (source_id, code, name, slug, category_id, region_id, producer, base_price,
                 description, tasting_notes, pairing_notes, barcode)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(&input.source_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category_id)
            .bind(input.region_id)
            .bind(&input.producer)
            .bind(input.base_price)
            .bind(&input.description)
            .bind(&input.tasting_notes)
            .bind(&input.pairing_notes)
            .bind(&input.barcode)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every mutable field of an existing wine.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpsertWine) -> Result<Wine, sqlx::Error> {
        let query = format!(
            "UPDATE wines SET
                source_id = $2,
                code = $3,
                name = $4,
                slug = $5,
                category_id = $6,
                region_id = $7,
                producer = $8,
                base_price = $9,
                description = $10,
                tasting_notes = $11,
                pairing_notes = $12,
                barcode = $13,
                is_active = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wine>(&query)
            .bind(id)
            .bind(&input.source_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.category_id)
            .bind(input.region_id)
            .bind(&input.producer)
            .bind(input.base_price)
            .bind(&input.description)
            .bind(&input.tasting_notes)
            .bind(&input.pairing_notes)
            .bind(&input.barcode)
            .fetch_one(pool)
            .await
    }

    /// Find the wine imported from the given Airtable record.
    pub async fn find_by_source_id(
        pool: &PgPool,
        source_id: &str,
    ) -> Result<Option<Wine>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM wines WHERE source_id = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Wine>(&query)
            .bind(source_id)
            .fetch_optional(pool)
            .await
    }

    /// Count all wines.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wines")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
