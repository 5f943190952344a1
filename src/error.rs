//! Crate-wide error type

use thiserror::Error;

/// Errors that can occur while loading configuration, schemas, or building items
#[derive(Debug, Error)]
pub enum IndexingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid configuration value for {key}: {value:?}")]
    ConfigFormat { key: String, value: String },

    #[error("structured data validation failed: {0}")]
    SchemaValidation(String),

    #[error("{0} is not initialized")]
    NotInitialized(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for indexing operations
pub type IndexingResult<T> = Result<T, IndexingError>;
