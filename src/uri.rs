//! `data:` URI encoding for SVG markup

use base64::Engine;

use crate::error::{PenroseError, Result};

/// Prefix of every token URI.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// Wrap markup as a base64 `data:` URI (standard alphabet, padded, no wraps).
pub fn encode_data_uri(markup: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(markup.as_bytes());
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}

/// Recover the markup from a URI produced by [`encode_data_uri`].
///
/// # Errors
///
/// Returns [`PenroseError::InvalidDataUri`] if the prefix is missing, the
/// payload is not valid base64, or the decoded bytes are not UTF-8.
pub fn decode_data_uri(uri: &str) -> Result<String> {
    let payload = uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| PenroseError::InvalidDataUri(format!("missing '{}' prefix", DATA_URI_PREFIX)))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| PenroseError::InvalidDataUri(format!("invalid base64 payload: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| PenroseError::InvalidDataUri(format!("payload is not UTF-8: {}", e)))
}
