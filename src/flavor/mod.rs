//! Flavor identity and descriptor records
//!
//! A flavor is a named representation of a persisted model suitable for a
//! particular runtime. Each flavor has its own descriptor schema; a
//! manifest stores descriptors under their flavor names.

mod descriptors;

pub use descriptors::{JsonStateFlavor, SafeTensorsFlavor};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named flavor configuration.
///
/// The implementing type is the descriptor schema; `NAME` is the key the
/// descriptor is stored under in a manifest's flavor table.
pub trait Flavor: Serialize + DeserializeOwned {
    /// Flavor-table key. Lookup is exact-match; no aliasing, no case
    /// folding.
    const NAME: &'static str;
}
