//! Error types for schema loading

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for loading schemas and type references
#[derive(Error, Debug)]
pub enum SchemaError {
    /// I/O error while reading a schema file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema JSON could not be parsed
    #[error("invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Type reference notation could not be parsed
    #[error("invalid type reference '{0}'")]
    InvalidTypeRef(String),
}
