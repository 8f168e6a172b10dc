//! Test Helpers

use serde_json::Value;

use crate::documents::Document;

/// Unwrap a `json!` object literal into a [`Document`].
pub(crate) fn document(value: Value) -> Document {
    match value {
        Value::Object(fields) => fields,
        other => panic!("expected a JSON object, got {other}"),
    }
}
