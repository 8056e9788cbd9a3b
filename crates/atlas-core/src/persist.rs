//! Wire format for persisted key sequences: a JSON string array.
//!
//! Decoding is total: malformed storage content degrades to an
//! empty sequence instead of surfacing an error.

/// Encode a key sequence for storage.
pub fn encode_keys(keys: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(keys)
}

/// Decode a stored key sequence. Anything that is not a JSON string array
/// yields an empty sequence.
pub fn decode_keys(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}
