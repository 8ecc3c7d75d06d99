use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::error::ImportResult;
use crate::mapper::map_customer;
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Upsert every contact by email.
///
/// Contacts without an email get a placeholder address, so the only way a
/// contact is skipped is a rejected write.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Customers, records.len());

    for record in records {
        let input = map_customer(record);
        match per_record(store.upsert_customer(&input).await)? {
            Ok(customer) => {
                tracing::debug!(source_id = %record.id, customer_id = customer.id, "Customer upserted");
                summary.record_imported();
            }
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}
