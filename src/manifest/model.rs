//! Manifest structure and disk format

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::Result;
use crate::flavor::Flavor;

/// Well-known manifest filename inside a model directory
pub const MANIFEST_FILENAME: &str = "model.yaml";

/// A parsed model manifest.
///
/// Carries run metadata and a flavor table mapping flavor names to raw
/// configurations. The root path is recorded only when the manifest is
/// read from disk; in-memory manifests have none. A manifest contains at
/// most one configuration per flavor name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Model name/identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Run that produced the model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,

    /// Creation timestamp (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Flavor name -> raw flavor configuration
    #[serde(default)]
    flavors: HashMap<String, Value>,

    /// Directory the manifest was read from; never serialized
    #[serde(skip)]
    root_path: Option<PathBuf>,
}

impl Manifest {
    /// Create an in-memory manifest with no root path
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            run_id: None,
            created_at: Some(Utc::now()),
            flavors: HashMap::new(),
            root_path: None,
        }
    }

    /// Read the manifest from `<dir>/model.yaml`, recording `dir` as the
    /// model's root path
    pub fn from_root_path(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut manifest = Self::read(&dir.join(MANIFEST_FILENAME))?;
        manifest.root_path = Some(dir.to_path_buf());
        Ok(manifest)
    }

    /// Read the manifest from a configuration file, recording the file's
    /// parent directory as the model's root path
    pub fn from_config_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut manifest = Self::read(path)?;
        manifest.root_path = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    fn read(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading model manifest");
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Root directory of the model, when the manifest was read from disk
    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    /// Set the run that produced the model
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    /// Add a raw flavor entry under `name`, replacing any existing entry
    pub fn with_flavor(mut self, name: impl Into<String>, config: Value) -> Self {
        self.flavors.insert(name.into(), config);
        self
    }

    /// Add a typed flavor entry under its flavor name
    pub fn add_flavor<F: Flavor>(&mut self, flavor: &F) -> Result<()> {
        self.flavors
            .insert(F::NAME.to_string(), serde_yaml::to_value(flavor)?);
        Ok(())
    }

    /// Look up the configuration for flavor `F`.
    ///
    /// Lookup is exact-match on `F::NAME`. A configuration present under
    /// the name but not deserializable into `F` is reported as absent.
    pub fn flavor<F: Flavor>(&self) -> Option<F> {
        self.flavors
            .get(F::NAME)
            .cloned()
            .and_then(|value| serde_yaml::from_value(value).ok())
    }

    /// Whether the manifest carries a flavor under `name`
    pub fn has_flavor(&self, name: &str) -> bool {
        self.flavors.contains_key(name)
    }

    /// Names of all flavors in the manifest, sorted
    pub fn flavor_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.flavors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Write the manifest as YAML to `path`
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Write the manifest to `<dir>/model.yaml`
    pub fn save_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        self.save(dir.as_ref().join(MANIFEST_FILENAME))
    }
}
