//! Declarative wire schemas, one per protocol version.
//!
//! A [`Schema`] is a closed tree of field primitives that the codec engine
//! interprets. The engine walks the schema, never the value, to decide how
//! many bits each field consumes, so a payload can only be read back with the
//! exact schema it was written with.
//!
//! Schemas are append-only: a new protocol version adds a new module and a
//! new arm in [`schema_for_version`]. Published schemas, and the reference
//! tables their enumerations point at, are never edited in place.

pub mod v2;

/// Protocol version written by new shares
pub const CURRENT_VERSION: u32 = 2;

/// A wire field primitive
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Schema {
    /// Single bit
    Bool,
    /// Fixed-width unsigned integer
    Uint { bits: u8 },
    /// Unsigned integer in 4-bit groups with continuation bits
    VarUint,
    /// Signed decimal stored exactly as `value * scale`
    Decimal { scale: u32 },
    /// One of a fixed, ordered set of string keys, stored as its index
    Enum(&'static [&'static str]),
    /// Length-prefixed 7-bit ASCII string
    Str,
    /// Presence bit followed by the inner field when present
    Optional(&'static Schema),
    /// Named fields in declaration order
    Object(&'static [(&'static str, Schema)]),
    /// Length-prefixed homogeneous list
    Array(&'static Schema),
    /// Length-prefixed entries in ascending key order
    Map {
        key: &'static Schema,
        value: &'static Schema,
    },
}

impl Schema {
    /// Look up a direct child of an object schema
    pub fn field(&self, name: &str) -> Option<&Schema> {
        match self {
            Schema::Object(fields) => fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }
}

/// Bits needed to store an index into `len` enumeration keys
pub fn enum_index_bits(len: usize) -> usize {
    if len <= 1 {
        0
    } else {
        (usize::BITS - (len - 1).leading_zeros()) as usize
    }
}

/// Schema registered for a protocol version, if any
pub fn schema_for_version(version: u32) -> Option<&'static Schema> {
    match version {
        2 => Some(&v2::FLEX),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_index_bits() {
        assert_eq!(enum_index_bits(0), 0);
        assert_eq!(enum_index_bits(1), 0);
        assert_eq!(enum_index_bits(2), 1);
        assert_eq!(enum_index_bits(3), 2);
        assert_eq!(enum_index_bits(4), 2);
        assert_eq!(enum_index_bits(5), 3);
        assert_eq!(enum_index_bits(128), 7);
        assert_eq!(enum_index_bits(129), 8);
    }

    #[test]
    fn test_version_registry() {
        assert!(schema_for_version(CURRENT_VERSION).is_some());
        assert!(schema_for_version(1).is_none());
        assert!(schema_for_version(0).is_none());
        assert!(schema_for_version(999).is_none());
    }

    #[test]
    fn test_field_lookup() {
        let character = v2::FLEX.field("character").unwrap();
        assert!(matches!(character.field("weapon"), Some(Schema::Object(_))));
        assert!(character.field("equippedWeapon").is_none());
        assert!(Schema::Bool.field("anything").is_none());
    }
}
