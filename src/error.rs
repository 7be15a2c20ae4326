//! Error types for rawg_catalog

use thiserror::Error;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body could not be decoded into the requested type
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Server answered outside the 2xx range
    #[error("HTTP error: {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: Option<Vec<u8>>,
    },
    /// Server answered 2xx with no body
    #[error("Server response was empty")]
    EmptyResponse,
    /// Request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Unknown games list ordering
    #[error("Unknown ordering: {0}")]
    InvalidOrdering(String),
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
