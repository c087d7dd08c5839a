//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for code generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors that abort a generation run. Nothing is written when one occurs.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema could not be loaded.
    #[error("schema error: {0}")]
    Schema(#[from] stubsmith_core::SchemaError),

    /// Configuration is missing, malformed, or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Template could not be compiled or rendered.
    #[error("template rendering failed: {0}")]
    Render(#[from] tinytemplate::error::Error),

    /// I/O error while reading inputs or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered output could not be moved into place.
    #[error("failed to persist output to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
