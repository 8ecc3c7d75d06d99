//! Airtable export records and tolerant field access.
//!
//! An export directory holds one JSON file per Airtable table. Each file
//! wraps the table's rows as `{ id, fields, createdTime }` records, where
//! `fields` is an untyped map keyed by the (Spanish) column names used in
//! the Airtable base.
//!
//! Airtable is loose about field shapes: numbers may arrive as strings,
//! link and lookup columns arrive as arrays, blank cells are simply
//! missing. The accessors on [`SourceRecord`] normalise all of that so the
//! field mapper can ask for "the text in `Nombre`" without caring.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::{Pesos, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Extension of every export file.
pub const EXPORT_FILE_EXTENSION: &str = "json";

/// Maximum length of an Airtable table name.
pub const MAX_TABLE_NAME_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Untyped Airtable field map.
pub type Fields = serde_json::Map<String, Value>;

/// One row of an Airtable table, as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Airtable record id (`rec…`).
    pub id: String,
    #[serde(default)]
    pub fields: Fields,
    /// Creation time as exported; parsed lazily via [`SourceRecord::created_at`].
    #[serde(rename = "createdTime", default)]
    pub created_time: Option<String>,
}

/// Top-level shape of an export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportTable {
    #[serde(rename = "tableName", default)]
    pub table_name: Option<String>,
    #[serde(rename = "recordCount", default)]
    pub record_count: Option<usize>,
    pub records: Vec<SourceRecord>,
    #[serde(rename = "exportedAt", default)]
    pub exported_at: Option<String>,
}

impl SourceRecord {
    /// Build a record from an id and a JSON object of fields.
    ///
    /// Non-object values produce an empty field map.
    pub fn new(id: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Fields::new(),
        };
        Self {
            id: id.into(),
            fields,
            created_time: None,
        }
    }

    /// Raw value of a field, if present.
    pub fn raw(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Trimmed, non-empty text of a field.
    ///
    /// Numbers and booleans are rendered as text; for arrays (lookup
    /// columns) the first element is used.
    pub fn text(&self, key: &str) -> Option<String> {
        self.raw(key).and_then(value_text)
    }

    /// Numeric value of a field, accepting JSON numbers and numeric text.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.raw(key).and_then(value_number)
    }

    /// Integer value of a field, truncating any fractional part.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.number(key).map(|n| n.trunc() as i64)
    }

    /// Amount in whole pesos, rounding any fractional part.
    pub fn pesos(&self, key: &str) -> Option<Pesos> {
        self.number(key).map(to_pesos)
    }

    /// Record ids held by a link column.
    ///
    /// A single string is treated as a one-element link list.
    pub fn links(&self, key: &str) -> Vec<String> {
        match self.raw(key) {
            Some(Value::Array(items)) => items.iter().filter_map(value_text).collect(),
            Some(other) => value_text(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// First record id held by a link column.
    pub fn first_link(&self, key: &str) -> Option<String> {
        self.links(key).into_iter().next()
    }

    /// Timestamp held by a field. `None` when absent, `Some(Err)` when unparseable.
    pub fn timestamp(&self, key: &str) -> Option<Result<Timestamp, CoreError>> {
        self.text(key).map(|raw| parse_timestamp(&raw))
    }

    /// Airtable creation time of the record, when exported and parseable.
    pub fn created_at(&self) -> Option<Timestamp> {
        self.created_time
            .as_deref()
            .and_then(|raw| parse_timestamp(raw).ok())
    }
}

// ---------------------------------------------------------------------------
// Value conversion
// ---------------------------------------------------------------------------

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => items.first().and_then(value_text),
        Value::Null | Value::Object(_) => None,
    }
}

fn value_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => parse_number(s),
        Value::Array(items) => items.first().and_then(value_number),
        _ => None,
    }
}

/// Parse the leading numeric portion of a string.
///
/// `"25990"` → `25990.0`, `" 90 min"` → `90.0`, `"abc"` → `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
}

/// Round a numeric amount to whole pesos.
pub fn to_pesos(amount: f64) -> Pesos {
    amount.round() as Pesos
}

/// Parse an Airtable date or date-time.
///
/// Accepts RFC 3339 (`2024-03-01T15:00:00.000Z`), naive date-times
/// (`2024-03-01T15:00:00`, taken as UTC) and plain dates (`2024-03-01`,
/// midnight UTC).
pub fn parse_timestamp(raw: &str) -> Result<Timestamp, CoreError> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    Err(CoreError::InvalidTimestamp(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Export file naming
// ---------------------------------------------------------------------------

/// Validate an Airtable table name before it is turned into a file name.
pub fn validate_table_name(table: &str) -> Result<(), CoreError> {
    if table.trim().is_empty() {
        return Err(CoreError::InvalidTableName(
            "table name cannot be empty".to_string(),
        ));
    }
    if table.len() > MAX_TABLE_NAME_LENGTH {
        return Err(CoreError::InvalidTableName(format!(
            "table name exceeds maximum length of {MAX_TABLE_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// File name of a table's export: every ASCII non-alphanumeric character
/// becomes `_`.
///
/// `"Venta de Vinos"` → `"Venta_de_Vinos.json"`.
pub fn export_file_name(table: &str) -> String {
    let stem: String = table
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}.{EXPORT_FILE_EXTENSION}")
}
