//! Error types for dataset access.

use thiserror::Error;

/// Errors that can occur while building, persisting or loading the dataset.
#[derive(Error, Debug)]
pub enum GridError {
    /// Failed to open the dataset store.
    #[error("failed to open dataset store: {0}")]
    OpenFailed(String),

    /// Failed to read data from the store.
    #[error("failed to read dataset: {0}")]
    ReadFailed(String),

    /// Failed to write data to the store.
    #[error("failed to write dataset: {0}")]
    WriteFailed(String),

    /// The store exists but is not a container this crate understands.
    #[error("unsupported dataset container: {0}")]
    UnsupportedContainer(String),

    /// Invalid manifest or array metadata.
    #[error("invalid dataset metadata: {0}")]
    InvalidMetadata(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Reference data download failed.
    #[error("download failed: {0}")]
    DownloadFailed(String),
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::WriteFailed(err.to_string())
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidMetadata(err.to_string())
    }
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, GridError>;
