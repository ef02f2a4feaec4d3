use crate::core::operation::TransformError;
use serde_json::Value;

/// Re-serialize a JSON document with two-space indentation.
pub fn json_prettify(input: &str) -> Result<String, TransformError> {
    let parsed: Value =
        serde_json::from_str(input).map_err(|_| TransformError::InvalidFormat("JSON"))?;
    serde_json::to_string_pretty(&parsed).map_err(|_| TransformError::InvalidFormat("JSON"))
}
