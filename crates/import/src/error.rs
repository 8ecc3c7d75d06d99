use std::path::PathBuf;

use laberinto_core::error::CoreError;

/// SQLSTATE class of integrity constraint violations (unique, foreign key,
/// not-null, check, exclusion).
const INTEGRITY_CONSTRAINT_CLASS: &str = "23";

/// Error raised by an [`ImportStore`](crate::store::ImportStore) call.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A write collided with an existing row on a unique key.
    #[error("Conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Whether the failure concerns only the row being written.
    ///
    /// Only integrity constraint violations (SQLSTATE class `23`) affect a
    /// single record. Every other server error (shutdown, missing relation,
    /// cancelled query) and every connection or pool failure means the
    /// store itself is unusable.
    pub fn is_record_level(&self) -> bool {
        match self {
            StoreError::Conflict(_) => true,
            StoreError::Database(sqlx::Error::Database(db_err)) => db_err
                .code()
                .is_some_and(|code| code.starts_with(INTEGRITY_CONSTRAINT_CLASS)),
            StoreError::Database(_) => false,
        }
    }
}

/// Run-level error. Any of these aborts the import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// An export file exists but could not be read.
    #[error("Failed to read export {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An export file is not valid JSON of the expected shape.
    #[error("Malformed export {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The destination store failed outside a single record's write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Schema migrations could not be applied.
    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A domain-level error from `laberinto_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<sqlx::Error> for ImportError {
    fn from(err: sqlx::Error) -> Self {
        ImportError::Store(StoreError::Database(err))
    }
}

/// Convenience type alias for import results.
pub type ImportResult<T> = Result<T, ImportError>;
