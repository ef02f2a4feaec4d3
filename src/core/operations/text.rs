use crate::core::operation::TransformError;

/// Reverse the sequence of Unicode code points, not raw bytes.
pub fn reverse(input: &str) -> Result<String, TransformError> {
    Ok(input.chars().rev().collect())
}

pub fn to_uppercase(input: &str) -> Result<String, TransformError> {
    Ok(input.to_uppercase())
}

pub fn to_lowercase(input: &str) -> Result<String, TransformError> {
    Ok(input.to_lowercase())
}
