use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::error::ImportResult;
use crate::mapper::map_location;
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Upsert every location by name.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Locations, records.len());

    for record in records {
        let input = match map_location(record) {
            Ok(input) => input,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        match per_record(store.upsert_location(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}
