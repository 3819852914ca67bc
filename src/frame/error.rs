//! Frame error types

use thiserror::Error;

/// Frame errors
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),
}

/// Result type for frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
