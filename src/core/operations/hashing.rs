use crate::core::operation::TransformError;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};

/// Digest the UTF-8 bytes of the input, encoded as lowercase hex.
fn digest_hex<D: Digest>(input: &str) -> String {
    let mut hasher = D::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn md5_hex(input: &str) -> Result<String, TransformError> {
    Ok(digest_hex::<Md5>(input))
}

pub fn sha1_hex(input: &str) -> Result<String, TransformError> {
    Ok(digest_hex::<Sha1>(input))
}

pub fn sha256_hex(input: &str) -> Result<String, TransformError> {
    Ok(digest_hex::<Sha256>(input))
}

pub fn sha512_hex(input: &str) -> Result<String, TransformError> {
    Ok(digest_hex::<Sha512>(input))
}
