//! Document loading errors.

use std::path::PathBuf;

/// Errors that can occur while reading a bundled document.
///
/// Loaders never return these to callers; they log and degrade to empty data.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document not found at {0}")]
    NotFound(PathBuf),
}
