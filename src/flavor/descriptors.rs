//! Built-in flavor descriptor records

use serde::{Deserialize, Serialize};

use super::Flavor;

/// Descriptor for transformer weights persisted as SafeTensors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeTensorsFlavor {
    /// Weights file, relative to the model root (e.g. `model.safetensors`)
    pub weights: String,

    /// Architecture hint for the runtime (e.g. `Qwen2ForCausalLM`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

impl Flavor for SafeTensorsFlavor {
    const NAME: &'static str = "safetensors";
}

/// Descriptor for tabular model state serialized as a JSON document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonStateFlavor {
    /// State document, relative to the model root (e.g. `final_model.json`)
    pub data: String,

    /// Version of the library that wrote the state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Flavor for JsonStateFlavor {
    const NAME: &'static str = "json-state";
}
