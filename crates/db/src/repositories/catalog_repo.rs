//! Repository for the `wine_regions` and `wine_categories` lookup tables.

use sqlx::PgPool;

use crate::models::catalog::{WineCategory, WineRegion};

const REGION_COLUMNS: &str = "id, name, country, created_at, updated_at";
const CATEGORY_COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides get-or-create access to wine regions and categories.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Return the region with this name, creating it if missing.
    ///
    /// An existing region keeps its stored country.
    pub async fn ensure_region(
        pool: &PgPool,
        name: &str,
        country: &str,
    ) -> Result<WineRegion, sqlx::Error> {
        let query = format!(
            "INSERT INTO wine_regions (name, country)
             VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING {REGION_COLUMNS}"
        );
        sqlx::query_as::<_, WineRegion>(&query)
            .bind(name)
            .bind(country)
            .fetch_one(pool)
            .await
    }

    /// Return the category with this slug, creating it if missing.
    pub async fn ensure_category(
        pool: &PgPool,
        name: &str,
        slug: &str,
    ) -> Result<WineCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO wine_categories (name, slug)
             VALUES ($1, $2)
             ON CONFLICT (slug) DO UPDATE SET slug = EXCLUDED.slug
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, WineCategory>(&query)
            .bind(name)
            .bind(slug)
            .fetch_one(pool)
            .await
    }
}
