//! Codec errors and the field path they carry.

use std::fmt;

/// One step from the payload root towards a failing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field name
    Field(&'static str),
    /// Array position
    Index(usize),
    /// Map entry key
    Key(String),
}

/// Location of a codec failure inside the payload.
///
/// Segments are collected leaf-first while the failure unwinds through the
/// schema walk; [`FieldPath::segments`] and `Display` present them root-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    /// Segments from the root to the failing field
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.0.iter().rev()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        for (i, segment) in self.segments().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

/// What went wrong at the failing field
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CodecErrorKind {
    #[error("payload ended before the schema was satisfied")]
    Truncated,

    #[error("variable-length integer runs past 64 bits")]
    Overlong,

    #[error("{bits} bits of unexpected data after the payload")]
    TrailingData { bits: usize },

    #[error("payload is not URL-safe base64: {0}")]
    InvalidText(String),

    #[error("enum index {index} out of range for {len} keys")]
    EnumIndexOutOfRange { index: u64, len: usize },

    #[error("key {0:?} is not in the schema's enumeration")]
    UnknownEnumKey(String),

    #[error("value {value} does not fit in {bits} bits")]
    Overflow { value: u64, bits: u8 },

    #[error("value {value} cannot be represented at scale {scale}")]
    NotRepresentable { value: f64, scale: u32 },

    #[error("length {len} exceeds the maximum of {max}")]
    LengthOutOfRange { len: u64, max: u64 },

    #[error("string {0:?} contains non-ASCII characters")]
    NonAscii(String),

    #[error("required field is missing")]
    MissingField,

    #[error("expected {expected}")]
    TypeMismatch { expected: &'static str },

    #[error("map keys must be strings or enumerations")]
    InvalidMapKey,

    #[error("duplicate map key {0:?}")]
    DuplicateMapKey(String),
}

/// A schema mismatch found while encoding or decoding, with its field path
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} (at {path})")]
pub struct CodecError {
    kind: CodecErrorKind,
    path: FieldPath,
}

impl CodecError {
    pub fn new(kind: CodecErrorKind) -> Self {
        Self {
            kind,
            path: FieldPath::default(),
        }
    }

    /// Record that the failure happened inside `segment`
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.0.push(segment);
        self
    }

    pub fn kind(&self) -> &CodecErrorKind {
        &self.kind
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }
}

impl From<CodecErrorKind> for CodecError {
    fn from(kind: CodecErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_displays_root_first() {
        let err = CodecError::new(CodecErrorKind::MissingField)
            .within(PathSegment::Field("value"))
            .within(PathSegment::Index(2))
            .within(PathSegment::Field("substats"))
            .within(PathSegment::Index(0))
            .within(PathSegment::Field("artifacts"));

        assert_eq!(err.path().to_string(), "artifacts[0].substats[2].value");
        assert_eq!(
            err.path().segments().next(),
            Some(&PathSegment::Field("artifacts"))
        );
    }

    #[test]
    fn test_map_key_segment() {
        let err = CodecError::new(CodecErrorKind::Truncated)
            .within(PathSegment::Key("critRate_".to_string()))
            .within(PathSegment::Field("baseStatOverrides"));
        assert_eq!(err.path().to_string(), "baseStatOverrides[\"critRate_\"]");
    }

    #[test]
    fn test_root_path() {
        let err = CodecError::new(CodecErrorKind::TrailingData { bits: 9 });
        assert!(err.path().is_root());
        assert_eq!(
            err.to_string(),
            "9 bits of unexpected data after the payload (at <root>)"
        );
    }
}
