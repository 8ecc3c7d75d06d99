//! Runs a complete import: clear the destination, then every entity in order.

use laberinto_core::airtable::SourceRecord;

use crate::error::ImportResult;
use crate::importers::{
    bookings, customers, events, experiences, locations, products, sales, wines, Entity,
};
use crate::reader::ExportReader;
use crate::store::ImportStore;
use crate::summary::{EntitySummary, RunSummary};

/// Clear every imported table and import all entities from `reader`.
///
/// Entities are imported in [`Entity::ORDER`], each one's summary printed
/// as soon as it finishes. The first fatal error ends the run; entities
/// imported before it stay written.
pub async fn run<S: ImportStore + ?Sized>(
    store: &S,
    reader: &ExportReader,
) -> ImportResult<RunSummary> {
    tracing::info!(export_dir = %reader.dir().display(), "Starting import");

    let mut run = RunSummary {
        cleared: store.clear_imported().await?,
        entities: Vec::with_capacity(Entity::ORDER.len()),
    };
    let cleared_rows: u64 = run.cleared.iter().map(|(_, rows)| rows).sum();
    tracing::info!(rows = cleared_rows, "Cleared previously imported data");

    for entity in Entity::ORDER {
        let records = reader.load(entity.source_table())?;
        let summary = import_entity(store, entity, &records).await?;

        tracing::info!(
            entity = entity.label(),
            records = summary.records,
            imported = summary.imported,
            skipped = summary.skipped_count(),
            warnings = summary.warnings.len(),
            "Entity imported",
        );
        println!("{summary}");
        run.entities.push(summary);
    }

    Ok(run)
}

async fn import_entity<S: ImportStore + ?Sized>(
    store: &S,
    entity: Entity,
    records: &[SourceRecord],
) -> ImportResult<EntitySummary> {
    match entity {
        Entity::Customers => customers::import(store, records).await,
        Entity::Wines => wines::import(store, records).await,
        Entity::Locations => locations::import(store, records).await,
        Entity::Experiences => experiences::import(store, records).await,
        Entity::Events => events::import(store, records).await,
        Entity::Products => products::import(store, records).await,
        Entity::Sales => sales::import(store, records).await,
        Entity::Bookings => bookings::import(store, records).await,
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use assert_matches::assert_matches;
    use laberinto_core::airtable::export_file_name;
    use serde_json::{json, Value};

    use super::*;
    use crate::error::ImportError;
    use crate::mapper::STANDARD_PRODUCTS;
    use crate::store::memory::MemoryStore;

    fn write_export(dir: &Path, table: &str, records: Value) {
        let count = records.as_array().map_or(0, Vec::len);
        let body = json!({
            "tableName": table,
            "recordCount": count,
            "records": records,
            "exportedAt": "2024-06-01T00:00:00.000Z"
        });
        std::fs::write(dir.join(export_file_name(table)), body.to_string()).unwrap();
    }

    fn full_export(dir: &Path) {
        write_export(
            dir,
            "Contactos",
            json!([
                {"id": "recC1", "fields": {"Correo Electrónico": "ana@example.com", "Nombre Completo": "Ana Pérez"}},
                {"id": "recC2", "fields": {"Nombre": "Luis"}},
            ]),
        );
        write_export(
            dir,
            "Vinos",
            json!([
                {"id": "recW1", "fields": {"Vinos": "Malbec Reserva", "Código": "MR-1", "Precio": 15990}},
                {"id": "recW2", "fields": {"Vinos": "Carménère", "Precio": "12990"}},
                {"id": "recW3", "fields": {"Precio": 100}},
            ]),
        );
        write_export(
            dir,
            "Locaciones",
            json!([{"id": "recL1", "fields": {"Location Name": "Casa Patronal", "City": "Pirque"}}]),
        );
        write_export(
            dir,
            "Experiencias",
            json!([{"id": "recE1", "fields": {"Experiencia": "Cata Clásica", "Precio": 25000}}]),
        );
        write_export(
            dir,
            "Eventos",
            json!([
                {"id": "recEv1", "fields": {"Evento": "Cata sábado", "Experiencia": ["recE1"], "Fecha y hora de inicio": "2024-06-08T15:00:00.000Z"}},
                {"id": "recEv2", "fields": {"Evento": "Sin fecha"}},
            ]),
        );
        write_export(
            dir,
            "Productos",
            json!([{"id": "recP1", "fields": {"Name": "Caja Malbec", "Precio (from Vino)": [15990]}}]),
        );
        write_export(
            dir,
            "Venta de Vinos",
            json!([
                {"id": "recS1", "fields": {"Cliente": ["recC1"], "Vinos": ["recW1", "recW2"], "Total de la Venta": 28980}},
                {"id": "recS2", "fields": {"Cliente": ["missing"], "Total de la Venta": 100}},
            ]),
        );
        write_export(
            dir,
            "Reservas",
            json!([
                {"id": "recB1", "fields": {"Correo Lider (from Grupo)": ["ana@example.com"], "Precio Total Hipotético": 50000}},
            ]),
        );
    }

    #[tokio::test]
    async fn sale_is_linked_to_its_customer() {
        let tmp = tempfile::tempdir().unwrap();
        write_export(
            tmp.path(),
            "Contactos",
            json!([{"id": "c1", "fields": {"Correo Electrónico": "a@b.com"}}]),
        );
        write_export(
            tmp.path(),
            "Venta de Vinos",
            json!([{"id": "s1", "fields": {"Cliente": ["c1"], "Total de la Venta": "10000"}}]),
        );

        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();
        let summary = run(&store, &reader).await.unwrap();

        let customers = store.customers();
        let sales = store.sales();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].email, "a@b.com");
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].customer_id, customers[0].id);
        assert_eq!(sales[0].total_amount, 10_000);
        assert_eq!(summary.imported(Entity::Sales), 1);
    }

    #[tokio::test]
    async fn sale_with_unknown_customer_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        write_export(
            tmp.path(),
            "Venta de Vinos",
            json!([{"id": "s1", "fields": {"Cliente": ["missing"]}}]),
        );

        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();
        let summary = run(&store, &reader).await.unwrap();

        assert!(store.sales().is_empty());
        let sales = summary.get(Entity::Sales).unwrap();
        assert_eq!(sales.skipped_count(), 1);
        assert!(sales.mentions("missing"));
    }

    #[tokio::test]
    async fn full_export_counts() {
        let tmp = tempfile::tempdir().unwrap();
        full_export(tmp.path());

        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();
        let summary = run(&store, &reader).await.unwrap();

        assert_eq!(summary.imported(Entity::Customers), 2);
        assert_eq!(summary.imported(Entity::Wines), 2);
        assert_eq!(summary.skipped(Entity::Wines), 1);
        assert_eq!(summary.imported(Entity::Locations), 1);
        assert_eq!(summary.imported(Entity::Experiences), 1);
        assert_eq!(summary.imported(Entity::Events), 1);
        assert_eq!(summary.skipped(Entity::Events), 1);
        assert_eq!(summary.imported(Entity::Products), 1 + STANDARD_PRODUCTS.len());
        assert_eq!(summary.imported(Entity::Sales), 1);
        assert_eq!(summary.skipped(Entity::Sales), 1);
        assert_eq!(summary.imported(Entity::Bookings), 1);

        assert_eq!(store.sale_items().len(), 2);
        assert_eq!(store.experiences()[0].location_id, store.locations()[0].id);
        assert_eq!(store.bookings()[0].event_id, store.events()[0].id);
        assert_eq!(summary.entities.len(), Entity::ORDER.len());
    }

    #[tokio::test]
    async fn rerun_yields_same_rows() {
        let tmp = tempfile::tempdir().unwrap();
        full_export(tmp.path());
        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();

        let counts = |store: &MemoryStore| {
            [
                store.customers().len(),
                store.wines().len(),
                store.locations().len(),
                store.experiences().len(),
                store.events().len(),
                store.products().len(),
                store.sales().len(),
                store.sale_items().len(),
                store.bookings().len(),
            ]
        };

        let first = run(&store, &reader).await.unwrap();
        let after_first = counts(&store);
        let second = run(&store, &reader).await.unwrap();

        assert_eq!(counts(&store), after_first);
        assert_eq!(first.total_imported(), second.total_imported());
        assert_eq!(first.total_skipped(), second.total_skipped());
        assert!(second.cleared.iter().any(|(table, rows)| *table == "sales" && *rows == 1));
    }

    #[tokio::test]
    async fn empty_export_dir_imports_only_extras() {
        let tmp = tempfile::tempdir().unwrap();
        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();

        let summary = run(&store, &reader).await.unwrap();
        assert_eq!(summary.total_imported(), STANDARD_PRODUCTS.len());
        assert_eq!(summary.total_skipped(), 0);
        assert!(store.customers().is_empty());
    }

    #[tokio::test]
    async fn malformed_export_stops_after_committed_entities() {
        let tmp = tempfile::tempdir().unwrap();
        write_export(
            tmp.path(),
            "Contactos",
            json!([{"id": "c1", "fields": {"Correo Electrónico": "a@b.com"}}]),
        );
        std::fs::write(tmp.path().join("Vinos.json"), "{ not json").unwrap();

        let store = MemoryStore::new();
        let reader = ExportReader::open(tmp.path()).unwrap();

        assert_matches!(run(&store, &reader).await, Err(ImportError::Parse { .. }));
        assert_eq!(store.customers().len(), 1);
        assert!(store.products().is_empty());
    }

    #[tokio::test]
    async fn unreachable_store_fails_the_run() {
        let tmp = tempfile::tempdir().unwrap();
        let store = MemoryStore::new();
        store.set_unreachable(true);
        let reader = ExportReader::open(tmp.path()).unwrap();

        assert_matches!(run(&store, &reader).await, Err(ImportError::Store(_)));
    }
}
