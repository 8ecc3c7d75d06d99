//! Loads per-table Airtable export files from the export directory.

use std::path::{Path, PathBuf};

use laberinto_core::airtable::{export_file_name, validate_table_name, ExportTable, SourceRecord};

use crate::error::{ImportError, ImportResult};

/// Reads `<Table>.json` files out of one export directory.
#[derive(Debug, Clone)]
pub struct ExportReader {
    dir: PathBuf,
}

impl ExportReader {
    /// Open an export directory. Fails when the directory does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> ImportResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(ImportError::Config(format!(
                "Export directory not found: {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the export file for `table`.
    pub fn path_for(&self, table: &str) -> PathBuf {
        self.dir.join(export_file_name(table))
    }

    /// Load the records of one table, in file order.
    ///
    /// A missing file yields no records and a warning. A file that exists
    /// but cannot be read or parsed is an error.
    pub fn load(&self, table: &str) -> ImportResult<Vec<SourceRecord>> {
        validate_table_name(table)?;
        let path = self.path_for(table);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(table, path = %path.display(), "Export file not found, skipping table");
                return Ok(Vec::new());
            }
            Err(source) => return Err(ImportError::Io { path, source }),
        };

        let export: ExportTable =
            serde_json::from_str(&raw).map_err(|source| ImportError::Parse {
                path: path.clone(),
                source,
            })?;

        if let Some(expected) = export.record_count {
            if expected != export.records.len() {
                tracing::warn!(
                    table,
                    expected,
                    found = export.records.len(),
                    "Export record count does not match header",
                );
            }
        }

        tracing::info!(table, records = export.records.len(), "Loaded export");
        Ok(export.records)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn write(dir: &Path, file: &str, body: &str) {
        std::fs::write(dir.join(file), body).unwrap();
    }

    #[test]
    fn open_rejects_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert_matches!(ExportReader::open(missing), Err(ImportError::Config(_)));
    }

    #[test]
    fn load_preserves_file_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "Contactos.json",
            r#"{"tableName":"Contactos","recordCount":3,"records":[
                {"id":"rec3","fields":{}},
                {"id":"rec1","fields":{"Nombre":"Ana"}},
                {"id":"rec2","fields":{},"createdTime":"2024-01-01T00:00:00.000Z"}
            ]}"#,
        );
        let reader = ExportReader::open(tmp.path()).unwrap();
        let records = reader.load("Contactos").unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec3", "rec1", "rec2"]);
        assert_eq!(records[1].text("Nombre").as_deref(), Some("Ana"));
    }

    #[test]
    fn missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let reader = ExportReader::open(tmp.path()).unwrap();
        assert!(reader.load("Eventos").unwrap().is_empty());
    }

    #[test]
    fn table_name_with_spaces_maps_to_underscores() {
        let tmp = tempfile::tempdir().unwrap();
        write(
            tmp.path(),
            "Venta_de_Vinos.json",
            r#"{"records":[{"id":"recS","fields":{}}]}"#,
        );
        let reader = ExportReader::open(tmp.path()).unwrap();
        assert_eq!(reader.load("Venta de Vinos").unwrap().len(), 1);
    }

    #[test]
    fn malformed_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "Vinos.json", "{\"records\": [");
        let reader = ExportReader::open(tmp.path()).unwrap();
        assert_matches!(reader.load("Vinos"), Err(ImportError::Parse { .. }));
    }

    #[test]
    fn missing_records_array_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "Vinos.json", r#"{"tableName":"Vinos"}"#);
        let reader = ExportReader::open(tmp.path()).unwrap();
        assert_matches!(reader.load("Vinos"), Err(ImportError::Parse { .. }));
    }

    #[test]
    fn empty_table_name_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let reader = ExportReader::open(tmp.path()).unwrap();
        assert_matches!(reader.load(""), Err(ImportError::Core(_)));
    }
}
