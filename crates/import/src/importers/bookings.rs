use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::columns;
use crate::error::ImportResult;
use crate::mapper::{map_booking, SkipReason};
use crate::resolver::{CrossRefResolver, Resolution};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Insert every booking whose group leader was imported as a customer.
///
/// The export does not link bookings to events, so every booking is placed
/// on the earliest imported event.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Bookings, records.len());
    if records.is_empty() {
        return Ok(summary);
    }

    let resolver = CrossRefResolver::new(store);
    let event = store.earliest_event().await?;

    for record in records {
        let Some(email) = record.text(columns::booking::ORGANIZER_EMAIL) else {
            summary.record_skipped(
                &record.id,
                SkipReason::MissingField(columns::booking::ORGANIZER_EMAIL),
            );
            continue;
        };

        let organizer = match resolver.customer_by_email(&email).await? {
            Resolution::Resolved(customer) => customer,
            Resolution::Unresolved => {
                summary.record_skipped(
                    &record.id,
                    SkipReason::Unresolved {
                        field: columns::booking::ORGANIZER_EMAIL,
                        reference: email,
                    },
                );
                continue;
            }
        };

        let Some(event) = &event else {
            summary.record_skipped(&record.id, SkipReason::NothingToLink("event"));
            continue;
        };

        let input = map_booking(record, organizer.id, event.id);
        match per_record(store.create_booking(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}
