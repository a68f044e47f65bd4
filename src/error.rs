//! Error types for the scene exporter.

use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for export operations.
///
/// Per-mesh and per-material defects are recovered inside the run and never
/// surface here; these variants cover failures that prevent producing the
/// final document at all.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to serialize the document to JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing the output document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene input could not be interpreted.
    #[error("Invalid scene: {0}")]
    InvalidScene(String),
}
