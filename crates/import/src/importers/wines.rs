use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::error::ImportResult;
use crate::mapper::{map_wine, DEFAULT_CATEGORY, DEFAULT_REGION};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Upsert every wine into the default region and category.
///
/// Wines match an existing row on code first, then on slug, so two source
/// wines whose names slugify alike collapse into one row and the later
/// record wins.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Wines, records.len());
    if records.is_empty() {
        return Ok(summary);
    }

    let (region_name, country) = DEFAULT_REGION;
    let region = store.ensure_region(region_name, country).await?;
    let (category_name, category_slug) = DEFAULT_CATEGORY;
    let category = store.ensure_category(category_name, category_slug).await?;

    for record in records {
        let input = match map_wine(record, category.id, region.id) {
            Ok(input) => input,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        match per_record(store.upsert_wine(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}
