//! URL-safe text layer for packed payload bytes.
//!
//! Payload bytes are rendered with the RFC 4648 URL-safe alphabet and no
//! padding, so an encoded payload only ever contains `[A-Za-z0-9_-]` and can
//! sit in a query-string value without escaping.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use super::CodecErrorKind;

/// Render packed bytes as URL-safe text
pub fn encode_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Parse URL-safe text back into packed bytes
pub fn decode_text(text: &str) -> Result<Vec<u8>, CodecErrorKind> {
    URL_SAFE_NO_PAD
        .decode(text.trim())
        .map_err(|e| CodecErrorKind::InvalidText(e.to_string()))
}

/// True if `c` can appear in an encoded payload
pub fn is_payload_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
