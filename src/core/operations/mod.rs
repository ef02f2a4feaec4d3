pub mod cipher;
pub mod encoding;
pub mod format;
pub mod hashing;
pub mod text;

use crate::core::operation::{
    Operation, OperationRegistry, OperationRegistryBuilder, TransformError,
};
use crate::core::types::OperationCategory;
use serde_json::Value;

/// Catalog descriptor pairing display metadata with a pure transform.
///
/// Built-ins need no per-operation state, so a flat descriptor over a function
/// value covers the whole catalog.
pub struct BuiltinOperation {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: OperationCategory,
    transform: fn(&str) -> Result<String, TransformError>,
}

impl Operation for BuiltinOperation {
    fn id(&self) -> &'static str {
        self.id
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn category(&self) -> OperationCategory {
        self.category
    }

    fn apply(&self, input: &str, _params: &Value) -> Result<String, TransformError> {
        (self.transform)(input)
    }
}

/// Register the built-in catalog. Registration order is the display order.
pub fn register_builtins(builder: &mut OperationRegistryBuilder) {
    for operation in catalog() {
        builder.register(operation);
    }
}

/// Build a registry holding exactly the built-in catalog.
pub fn builtin_registry() -> OperationRegistry {
    let mut builder = OperationRegistry::builder();
    register_builtins(&mut builder);
    builder.build()
}

fn catalog() -> Vec<BuiltinOperation> {
    vec![
        BuiltinOperation {
            id: "base64-decode",
            name: "Base64 Decode",
            description: "Decodes a Base64 string back to plain text.",
            category: OperationCategory::Encoding,
            transform: encoding::base64_decode,
        },
        BuiltinOperation {
            id: "base64-encode",
            name: "Base64 Encode",
            description: "Encodes plain text into Base64 format.",
            category: OperationCategory::Encoding,
            transform: encoding::base64_encode,
        },
        BuiltinOperation {
            id: "hex-decode",
            name: "Hex Decode",
            description: "Converts hexadecimal values into plain text.",
            category: OperationCategory::Encoding,
            transform: encoding::hex_decode,
        },
        BuiltinOperation {
            id: "hex-encode",
            name: "Hex Encode",
            description: "Converts plain text into hexadecimal format.",
            category: OperationCategory::Encoding,
            transform: encoding::hex_encode,
        },
        BuiltinOperation {
            id: "md5",
            name: "MD5 Hash",
            description: "Computes the MD5 message-digest of the input.",
            category: OperationCategory::Hashing,
            transform: hashing::md5_hex,
        },
        BuiltinOperation {
            id: "sha1",
            name: "SHA-1 Hash",
            description: "Computes the SHA-1 hash of the input.",
            category: OperationCategory::Hashing,
            transform: hashing::sha1_hex,
        },
        BuiltinOperation {
            id: "sha256",
            name: "SHA-256 Hash",
            description: "Computes the SHA-256 hash of the input.",
            category: OperationCategory::Hashing,
            transform: hashing::sha256_hex,
        },
        BuiltinOperation {
            id: "sha512",
            name: "SHA-512 Hash",
            description: "Computes the SHA-512 hash of the input.",
            category: OperationCategory::Hashing,
            transform: hashing::sha512_hex,
        },
        BuiltinOperation {
            id: "rot13",
            name: "ROT13",
            description: "Applies ROT13 substitution cipher.",
            category: OperationCategory::Encryption,
            transform: cipher::rot13,
        },
        BuiltinOperation {
            id: "url-encode",
            name: "URL Encode",
            description: "Percent-encodes special characters in a URL.",
            category: OperationCategory::Encoding,
            transform: encoding::url_encode,
        },
        BuiltinOperation {
            id: "url-decode",
            name: "URL Decode",
            description: "Decodes percent-encoded characters.",
            category: OperationCategory::Encoding,
            transform: encoding::url_decode,
        },
        BuiltinOperation {
            id: "json-prettify",
            name: "JSON Prettify",
            description: "Formats a JSON string with indentation.",
            category: OperationCategory::DataFormat,
            transform: format::json_prettify,
        },
        BuiltinOperation {
            id: "reverse",
            name: "Reverse String",
            description: "Reverses the order of characters.",
            category: OperationCategory::Utils,
            transform: text::reverse,
        },
        BuiltinOperation {
            id: "to-uppercase",
            name: "To Uppercase",
            description: "Converts all characters to uppercase.",
            category: OperationCategory::Utils,
            transform: text::to_uppercase,
        },
        BuiltinOperation {
            id: "to-lowercase",
            name: "To Lowercase",
            description: "Converts all characters to lowercase.",
            category: OperationCategory::Utils,
            transform: text::to_lowercase,
        },
    ]
}
