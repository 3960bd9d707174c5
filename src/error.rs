//! Error types for the sunburst crate.

use crate::types::NodeId;
use thiserror::Error;

/// Errors raised while reading a dataset from disk.
///
/// These belong to the ingestion layer; the core tree and layout operations
/// never perform I/O and never fail on malformed row content (bad size
/// fields are skipped, not rejected).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the API and CLI layers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("No node matches path: {0}")]
    PathNotFound(String),
}
