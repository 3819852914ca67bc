//! Flavor-dispatch model loading for ML serving.
//!
//! `cargar` is the glue between persisted models and the tools that serve
//! them. A model directory carries a `model.yaml` manifest listing named
//! flavors; a [`LoaderModule`] selects the flavor it understands and builds
//! a generic [`Predictor`] from it. [`Frame`] covers the JSON tabular
//! frames predictors consume and produce.
//!
//! # Example
//!
//! ```ignore
//! use cargar::{LoaderModule, SafeTensorsFlavor};
//!
//! struct TransformerLoader;
//!
//! impl LoaderModule for TransformerLoader {
//!     type Flavor = SafeTensorsFlavor;
//!
//!     fn create_predictor(
//!         &self,
//!         root_path: &std::path::Path,
//!         flavor: SafeTensorsFlavor,
//!     ) -> cargar::loader::Result<Box<dyn cargar::Predictor>> {
//!         let weights = root_path.join(&flavor.weights);
//!         // hand the weights file to the inference runtime...
//!         # unimplemented!()
//!     }
//! }
//!
//! let predictor = TransformerLoader.load_path("/models/qwen-0.5b")?;
//! ```

pub mod flavor;
pub mod frame;
pub mod loader;
pub mod manifest;
pub mod predictor;

pub use flavor::{Flavor, JsonStateFlavor, SafeTensorsFlavor};
pub use frame::{DataType, Field, Frame, FrameError, Schema};
pub use loader::{LoadError, LoaderModule};
pub use manifest::{Manifest, ManifestError, MANIFEST_FILENAME};
pub use predictor::{PredictError, Predictor};
