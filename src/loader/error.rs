//! Loader error types

use thiserror::Error;

use crate::manifest::ManifestError;

/// Failures raised while loading a model as a predictor.
///
/// A single category with distinguishable kinds. Every variant propagates
/// to the caller; nothing is recovered or retried locally.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Requested flavor absent from the manifest, or present with an
    /// incompatible shape (reported identically)
    #[error("Attempted to load the {0} flavor of the model, but the model does not have this flavor")]
    FlavorNotPresent(String),

    /// Manifest carries no root path
    #[error(
        "The model's root path could not be found. Ensure the manifest was created with \
         Manifest::from_root_path or Manifest::from_config_path"
    )]
    RootPathMissing,

    /// Manifest could not be read from the given directory
    #[error(
        "Failed to load the model manifest at the specified path. Ensure the path points to \
         the root directory of a valid model: {0}"
    )]
    ManifestRead(#[from] ManifestError),

    /// Predictor construction failed; displays the constructor's own message
    #[error("{0}")]
    Predictor(String),
}

impl LoadError {
    /// Predictor-construction failure with the given message
    pub fn predictor(message: impl Into<String>) -> Self {
        Self::Predictor(message.into())
    }
}

/// Result type for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;
