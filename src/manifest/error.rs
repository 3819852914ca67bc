//! Manifest error types

use thiserror::Error;

/// Manifest errors
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, ManifestError>;
