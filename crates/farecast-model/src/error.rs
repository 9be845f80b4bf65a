use thiserror::Error;

/// Violations of the feature schema contract.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown feature column: {0}")]
    UnknownColumn(String),
    #[error("feature column set twice: {0}")]
    DuplicateColumn(String),
    #[error("feature column missing from row: {0}")]
    MissingColumn(String),
}
