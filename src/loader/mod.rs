//! Flavor-dispatch model loading
//!
//! A [`LoaderModule`] encapsulates flavor-specific model deserialization:
//! by implementing it, models of one flavor can be loaded as generic
//! [`Predictor`] objects, so serving tools can run them without knowing
//! the flavor. The dispatcher is stateless; an instance may be shared
//! across threads as long as its `create_predictor` is thread-safe.

mod error;
#[cfg(test)]
mod proptests;

pub use error::{LoadError, Result};

use std::path::Path;
use tracing::debug;

use crate::flavor::Flavor;
use crate::manifest::Manifest;
use crate::predictor::Predictor;

/// A flavor-specific model loader.
///
/// Implementations carry only two pieces of identity: the descriptor type
/// they understand (`Self::Flavor`) and the recipe for turning a root path
/// plus descriptor into a predictor. The provided methods perform the
/// dispatch and never touch the filesystem beyond the manifest read.
pub trait LoaderModule {
    /// Descriptor this loader understands; its `NAME` is the flavor the
    /// loader handles
    type Flavor: Flavor;

    /// Construct a predictor from a model root directory and the flavor
    /// configuration found in its manifest.
    ///
    /// On failure, implementations return a [`LoadError`] of their
    /// choosing; [`LoaderModule::load`] surfaces it unchanged.
    fn create_predictor(
        &self,
        root_path: &Path,
        flavor: Self::Flavor,
    ) -> Result<Box<dyn Predictor>>;

    /// Load a parsed model manifest as a generic predictor.
    ///
    /// Looks up this loader's flavor in the manifest, then the manifest's
    /// root path, then delegates to
    /// [`create_predictor`](LoaderModule::create_predictor). The flavor is
    /// checked before the root path.
    ///
    /// # Errors
    ///
    /// [`LoadError::FlavorNotPresent`] when the manifest has no
    /// configuration under this loader's flavor name (or one with an
    /// incompatible shape); [`LoadError::RootPathMissing`] when the
    /// manifest was not created from a path-bearing constructor; anything
    /// `create_predictor` returns, unchanged.
    fn load(&self, manifest: &Manifest) -> Result<Box<dyn Predictor>> {
        let flavor = manifest
            .flavor::<Self::Flavor>()
            .ok_or_else(|| LoadError::FlavorNotPresent(Self::Flavor::NAME.to_string()))?;
        let root_path = manifest.root_path().ok_or(LoadError::RootPathMissing)?;
        debug!(
            flavor = Self::Flavor::NAME,
            root = %root_path.display(),
            "creating predictor"
        );
        self.create_predictor(root_path, flavor)
    }

    /// Load the model directory at `root_path` as a generic predictor.
    ///
    /// Equivalent to reading the manifest with
    /// [`Manifest::from_root_path`] and calling
    /// [`load`](LoaderModule::load).
    ///
    /// # Errors
    ///
    /// [`LoadError::ManifestRead`] when the manifest cannot be read or
    /// parsed (no flavor lookup is attempted); otherwise as
    /// [`load`](LoaderModule::load).
    fn load_path(&self, root_path: impl AsRef<Path>) -> Result<Box<dyn Predictor>> {
        let manifest = Manifest::from_root_path(root_path)?;
        self.load(&manifest)
    }
}
