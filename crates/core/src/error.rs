/// Errors raised while interpreting exported Airtable values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unrecognised timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Invalid table name: {0}")]
    InvalidTableName(String),
}
