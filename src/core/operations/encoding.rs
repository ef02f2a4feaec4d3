use crate::core::operation::TransformError;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// ASCII set for URI-component encoding: everything except unreserved marks.
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn base64_encode(input: &str) -> Result<String, TransformError> {
    Ok(BASE64.encode(input.as_bytes()))
}

pub fn base64_decode(input: &str) -> Result<String, TransformError> {
    let bytes = BASE64
        .decode(input.trim())
        .map_err(|_| TransformError::InvalidEncoding("Base64"))?;
    String::from_utf8(bytes).map_err(|_| TransformError::InvalidEncoding("Base64"))
}

pub fn hex_encode(input: &str) -> Result<String, TransformError> {
    Ok(hex::encode(input.as_bytes()))
}

/// Whitespace is stripped before decoding so spaced dumps round-trip.
pub fn hex_decode(input: &str) -> Result<String, TransformError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = hex::decode(compact).map_err(|_| TransformError::InvalidEncoding("Hex"))?;
    String::from_utf8(bytes).map_err(|_| TransformError::InvalidEncoding("Hex"))
}

pub fn url_encode(input: &str) -> Result<String, TransformError> {
    Ok(utf8_percent_encode(input, COMPONENT_ENCODE_SET).to_string())
}

pub fn url_decode(input: &str) -> Result<String, TransformError> {
    // percent_decode passes malformed sequences through untouched, so validate
    // every '%' escape up front.
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(TransformError::InvalidEncoding("URL"));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| TransformError::InvalidEncoding("URL"))
}
