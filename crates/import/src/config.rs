use std::path::PathBuf;

use crate::error::{ImportError, ImportResult};

/// Default location of the Airtable export, relative to the working directory.
pub const DEFAULT_EXPORT_DIR: &str = "../laberinto-booking/airtable-export";

/// Default size of the database connection pool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Import configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Postgres connection string.
    pub database_url: String,
    /// Directory holding one `<Table>.json` per Airtable table.
    pub export_dir: PathBuf,
    /// Upper bound on pooled connections. The import itself is sequential.
    pub max_connections: u32,
}

impl ImportConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var               | Default                                |
    /// |-----------------------|----------------------------------------|
    /// | `DATABASE_URL`        | required                               |
    /// | `AIRTABLE_EXPORT_DIR` | `../laberinto-booking/airtable-export` |
    /// | `DB_MAX_CONNECTIONS`  | `5`                                    |
    pub fn from_env() -> ImportResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ImportResult<Self> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ImportError::Config("DATABASE_URL must be set".into()))?;

        let export_dir = lookup("AIRTABLE_EXPORT_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ImportError::Config(format!(
                    "DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                ))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            export_dir,
            max_connections,
        })
    }
}
