//! Predictor abstraction
//!
//! A predictor is the artifact a loader module produces: an opaque object
//! able to run inference over tabular frames. Concrete implementations
//! live with their flavor runtimes; this crate only defines the seam.

use thiserror::Error;

use crate::frame::Frame;

/// Prediction errors
#[derive(Debug, Error)]
pub enum PredictError {
    /// Input frame malformed or missing required columns
    #[error("Invalid input frame: {0}")]
    InvalidInput(String),

    /// Evaluation failed inside the underlying runtime
    #[error("Evaluation failed: {0}")]
    Evaluation(String),
}

/// Result type for predictor operations
pub type Result<T> = std::result::Result<T, PredictError>;

/// A loaded model able to run inference over tabular frames.
///
/// Ownership of a predictor belongs to the caller once a loader returns
/// it. Implementations must be usable from multiple threads.
pub trait Predictor: Send + Sync {
    /// Evaluate one frame of inputs, producing one frame of outputs
    fn predict(&self, input: &Frame) -> Result<Frame>;
}

impl std::fmt::Debug for dyn Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Predictor")
    }
}
