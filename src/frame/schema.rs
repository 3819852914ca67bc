//! Frame schema representation

use serde::{Deserialize, Serialize};

/// Cell type of a frame column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    String,
}

/// A named, typed column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name
    pub name: String,

    /// Cell type
    #[serde(rename = "type")]
    pub dtype: DataType,
}

impl Field {
    /// Create a new field
    pub fn new(name: impl Into<String>, dtype: DataType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Ordered set of columns making up a frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Columns in row order
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a schema from a list of fields
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Position of the column named `name`, if present
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}
