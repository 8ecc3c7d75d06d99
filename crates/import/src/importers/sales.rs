use chrono::Utc;

use laberinto_core::airtable::SourceRecord;

use super::{per_record, Entity};
use crate::columns;
use crate::error::ImportResult;
use crate::mapper::{map_sale, map_sale_item, SkipReason};
use crate::resolver::{CrossRefResolver, Resolution};
use crate::store::ImportStore;
use crate::summary::EntitySummary;

/// Insert every sale whose customer was imported, with one item per linked wine.
///
/// A sale whose customer does not resolve is skipped. A linked wine that
/// does not resolve only drops that item; the sale itself is kept.
pub async fn import<S: ImportStore + ?Sized>(
    store: &S,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    let mut summary = EntitySummary::new(Entity::Sales, records.len());
    let resolver = CrossRefResolver::new(store);
    let now = Utc::now();

    for record in records {
        let Some(customer_ref) = record.first_link(columns::sale::CUSTOMER) else {
            summary.record_skipped(&record.id, SkipReason::MissingField(columns::sale::CUSTOMER));
            continue;
        };

        let customer = match resolver.customer(&customer_ref).await? {
            Resolution::Resolved(customer) => customer,
            Resolution::Unresolved => {
                summary.record_skipped(
                    &record.id,
                    SkipReason::Unresolved {
                        field: columns::sale::CUSTOMER,
                        reference: customer_ref,
                    },
                );
                continue;
            }
        };

        let input = map_sale(record, customer.id, now);
        let sale = match per_record(store.create_sale(&input).await)? {
            Ok(sale) => sale,
            Err(reason) => {
                summary.record_skipped(&record.id, reason);
                continue;
            }
        };
        summary.record_imported();

        for wine_ref in record.links(columns::sale::WINES) {
            let wine = match resolver.wine(&wine_ref).await? {
                Resolution::Resolved(wine) => wine,
                Resolution::Unresolved => {
                    summary.record_warning(
                        &record.id,
                        SkipReason::Unresolved {
                            field: columns::sale::WINES,
                            reference: wine_ref,
                        },
                    );
                    continue;
                }
            };
            let item = map_sale_item(&record.id, sale.id, &wine);
            if let Err(reason) = per_record(store.create_sale_item(&item).await)? {
                summary.record_warning(&record.id, reason);
            }
        }
    }

    Ok(summary)
}
