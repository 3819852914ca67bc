//! Tabular frame and its JSON encoding

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{FrameError, Result};
use super::schema::Schema;

/// A tabular data frame: a schema plus row-major values.
///
/// Cells are kept as dynamically-typed JSON values; the schema records the
/// declared column types. Frames carry no state beyond their data and are
/// cheap to clone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Column schema
    pub schema: Schema,

    /// Row-major cell values
    pub rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Create a frame from a schema and rows
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Parse a frame from its UTF-8 JSON encoding.
    ///
    /// Whatever the underlying reader yields is returned as-is; a document
    /// with an empty schema and no rows is a valid empty frame.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the frame to its JSON encoding
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns declared by the schema
    pub fn num_fields(&self) -> usize {
        self.schema.fields.len()
    }

    /// Values of the column named `name`, in row order
    pub fn column(&self, name: &str) -> Result<Vec<&Value>> {
        let index = self
            .schema
            .field_index(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
        Ok(self.rows.iter().filter_map(|row| row.get(index)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{DataType, Field};
    use serde_json::json;

    fn sample_json() -> &'static str {
        r#"{
            "schema": {
                "fields": [
                    {"name": "id", "type": "long"},
                    {"name": "amount", "type": "double"}
                ]
            },
            "rows": [[1, 12.5], [2, 99.0]]
        }"#
    }

    #[test]
    fn test_from_json() {
        let frame = Frame::from_json(sample_json()).expect("parse should succeed");
        assert_eq!(frame.num_rows(), 2);
        assert_eq!(frame.num_fields(), 2);
        assert_eq!(frame.schema.fields[0].name, "id");
        assert_eq!(frame.rows[1][1], json!(99.0));
    }

    #[test]
    fn test_from_json_empty_frame_is_valid() {
        let frame = Frame::from_json(r#"{"schema": {"fields": []}, "rows": []}"#)
            .expect("parse should succeed");
        assert_eq!(frame.num_rows(), 0);
        assert_eq!(frame.num_fields(), 0);
    }

    #[test]
    fn test_from_json_propagates_reader_error() {
        let result = Frame::from_json("{ not a frame }");
        assert!(matches!(result, Err(FrameError::Json(_))));
    }

    #[test]
    fn test_from_json_missing_rows_is_an_error() {
        let result = Frame::from_json(r#"{"schema": {"fields": []}}"#);
        assert!(matches!(result, Err(FrameError::Json(_))));
    }

    #[test]
    fn test_column() {
        let frame = Frame::from_json(sample_json()).expect("parse should succeed");
        let amounts = frame.column("amount").expect("column should exist");
        assert_eq!(amounts, vec![&json!(12.5), &json!(99.0)]);
    }

    #[test]
    fn test_column_not_found() {
        let frame = Frame::from_json(sample_json()).expect("parse should succeed");
        let err = frame.column("missing").expect_err("column should be absent");
        assert!(matches!(err, FrameError::ColumnNotFound(_)));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_to_json_round_trip() {
        let frame = Frame::new(
            Schema::new(vec![Field::new("label", DataType::String)]),
            vec![vec![json!("fraud")], vec![json!("ok")]],
        );
        let json = frame.to_json().expect("serialization should succeed");
        let parsed = Frame::from_json(&json).expect("parse should succeed");
        assert_eq!(parsed, frame);
    }
}
