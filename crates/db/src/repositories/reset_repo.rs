//! Clears every table the Airtable import writes to.

use sqlx::PgPool;

/// Imported tables in the order they must be emptied: dependents first.
///
/// Wine regions and categories are reference data and survive a reset.
pub const CLEAR_ORDER: &[&str] = &[
    "sale_items",
    "sales",
    "bookings",
    "events",
    "experiences",
    "products",
    "locations",
    "wines",
    "customers",
];

/// Provides the pre-import reset.
pub struct ResetRepo;

impl ResetRepo {
    /// Delete every row from the imported tables in [`CLEAR_ORDER`].
    ///
    /// Each table is emptied by its own statement; no transaction spans
    /// them. Returns the number of rows removed per table.
    pub async fn clear_imported(pool: &PgPool) -> Result<Vec<(&'static str, u64)>, sqlx::Error> {
        let mut removed = Vec::with_capacity(CLEAR_ORDER.len());
        for table in CLEAR_ORDER {
            let result = sqlx::query(&format!("DELETE FROM {table}"))
                .execute(pool)
                .await?;
            tracing::debug!(table = *table, rows = result.rows_affected(), "Table cleared");
            removed.push((*table, result.rows_affected()));
        }
        Ok(removed)
    }
}
