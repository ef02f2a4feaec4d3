use crate::core::operation::TransformError;

/// Rotate ASCII letters by 13 places within their case; everything else passes
/// through unchanged.
pub fn rot13(input: &str) -> Result<String, TransformError> {
    let rotated = input
        .chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a' + 13) % 26) + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A' + 13) % 26) + b'A') as char,
            _ => c,
        })
        .collect();
    Ok(rotated)
}
