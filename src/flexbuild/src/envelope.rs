//! `v=<version>&d=<payload>` share string envelope.

use std::fmt;

/// Query-style key carrying the protocol version
pub const VERSION_KEY: &str = "v";

/// Query-style key carrying the encoded payload
pub const PAYLOAD_KEY: &str = "d";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("malformed envelope: {0}")]
    Malformed(String),

    #[error("unsupported protocol version {version}")]
    UnsupportedVersion { version: u32 },
}

/// A share string split into its version and payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    pub version: u32,
    pub payload: &'a str,
}

impl fmt::Display for Envelope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}&{}={}",
            VERSION_KEY, self.version, PAYLOAD_KEY, self.payload
        )
    }
}

/// Wrap an encoded payload in a versioned envelope
pub fn wrap(version: u32, payload: &str) -> String {
    Envelope { version, payload }.to_string()
}

/// Split a share string into version and payload.
///
/// Parts are separated by `&` and split on their first `=`. Parts without
/// `=` and unknown keys are ignored; a repeated key keeps its last value.
pub fn unwrap(text: &str) -> Result<Envelope<'_>, EnvelopeError> {
    let mut version = None;
    let mut payload = None;

    for part in text.trim().split('&') {
        match part.split_once('=') {
            Some((VERSION_KEY, value)) => version = Some(value),
            Some((PAYLOAD_KEY, value)) => payload = Some(value),
            _ => {}
        }
    }

    let version = version.ok_or_else(|| EnvelopeError::Malformed("missing version".into()))?;
    let payload = payload.ok_or_else(|| EnvelopeError::Malformed("missing payload".into()))?;

    Ok(Envelope {
        version: parse_version(version)?,
        payload,
    })
}

fn parse_version(s: &str) -> Result<u32, EnvelopeError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EnvelopeError::Malformed(format!("invalid version {:?}", s)));
    }
    s.parse()
        .map_err(|_| EnvelopeError::Malformed(format!("version {} out of range", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(2, "AbC-_"), "v=2&d=AbC-_");
    }

    #[test]
    fn test_unwrap() {
        let envelope = unwrap("v=2&d=AbC-_").unwrap();
        assert_eq!(envelope.version, 2);
        assert_eq!(envelope.payload, "AbC-_");
        assert_eq!(envelope.to_string(), "v=2&d=AbC-_");
    }

    #[test]
    fn test_unwrap_order_and_extras() {
        let envelope = unwrap("src=discord&d=xyz&junk&v=7").unwrap();
        assert_eq!(envelope.version, 7);
        assert_eq!(envelope.payload, "xyz");
    }

    #[test]
    fn test_repeated_key_keeps_last() {
        let envelope = unwrap("v=1&d=a&v=2&d=b").unwrap();
        assert_eq!(envelope.version, 2);
        assert_eq!(envelope.payload, "b");
    }

    #[test]
    fn test_unwrap_trims_surrounding_whitespace() {
        let envelope = unwrap("  v=2&d=abc\n").unwrap();
        assert_eq!(envelope.payload, "abc");
    }

    #[test]
    fn test_malformed() {
        for text in ["", "d=abc", "v=2", "v=&d=abc", "v=-1&d=abc", "v=two&d=abc", "v=+2&d=x"] {
            assert!(
                matches!(unwrap(text), Err(EnvelopeError::Malformed(_))),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_version_overflow_is_malformed() {
        assert!(matches!(
            unwrap("v=99999999999&d=abc"),
            Err(EnvelopeError::Malformed(_))
        ));
    }
}
