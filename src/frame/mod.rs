//! JSON tabular frame utilities
//!
//! Predictors exchange data as frames: a typed schema plus row-major
//! values, encoded as JSON on the wire.

mod error;
mod schema;
mod table;

pub use error::{FrameError, Result};
pub use schema::{DataType, Field, Schema};
pub use table::Frame;
