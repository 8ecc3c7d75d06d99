use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::error::ImportResult;
use crate::mapper::{map_product, standard_products};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Insert the wine products, then the standard extras.
///
/// Extras are written on every run, including runs whose export has no
/// products, and count towards `imported`.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Products, records.len());

    for record in records {
        let input = match map_product(record) {
            Ok(input) => input,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        match per_record(store.create_product(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    for extra in standard_products() {
        let source_id = extra.source_id.clone().unwrap_or_default();
        match per_record(store.create_product(&extra).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_warning(&source_id, reason),
        }
    }

    Ok(summary)
}
