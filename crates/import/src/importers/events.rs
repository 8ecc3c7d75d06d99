use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::columns;
use crate::error::ImportResult;
use crate::mapper::{map_event, SkipReason};
use crate::resolver::{CrossRefResolver, Resolution};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Insert every event under the experience it links to.
///
/// An event without an experience link falls back to the first imported
/// experience; a link that does not resolve skips the event.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Events, records.len());
    let resolver = CrossRefResolver::new(store);

    for record in records {
        let experience = match record.first_link(columns::event::EXPERIENCE) {
            Some(reference) => match resolver.experience(&reference).await? {
                Resolution::Resolved(experience) => experience,
                Resolution::Unresolved => {
                    summary.record_skipped(
                        &record.id,
                        SkipReason::Unresolved {
                            field: columns::event::EXPERIENCE,
                            reference,
                        },
                    );
                    continue;
                }
            },
            None => match store.first_experience().await? {
                Some(experience) => experience,
                None => {
                    summary.record_skipped(&record.id, SkipReason::NothingToLink("experience"));
                    continue;
                }
            },
        };

        let input = match map_event(record, &experience) {
            Ok(input) => input,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        match per_record(store.create_event(&input).await)? {
            Ok(_) => summary.record_imported(),
            Err(reason) => summary.record_skipped(&record.id, reason),
        }
    }

    Ok(summary)
}
