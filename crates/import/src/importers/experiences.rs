use laberinto_core::airtable::SourceRecord;
use laberinto_db::models::location::Location;

use super::{per_record, Entity};
use crate::error::ImportResult;
use crate::mapper::{default_location, map_experience};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Upsert every experience by slug, all attached to the default location.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Experiences, records.len());
    if records.is_empty() {
        return Ok(summary);
    }

    let location = default_location_for(store).await?;

    for record in records {
        let input = match map_experience(record, location.id) {
            Ok(input) => input,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        match per_record(store.upsert_experience(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}

/// The first imported location, or the vineyard itself when none was imported.
async fn default_location_for<S: ImportStore + ?Sized>(store: &S) -> ImportResult<Location> {
    if let Some(location) = store.first_location().await? {
        return Ok(location);
    }
    let location = store.upsert_location(&default_location()).await?;
    tracing::info!(location_id = location.id, name = %location.name, "Created default location");
    Ok(location)
}
