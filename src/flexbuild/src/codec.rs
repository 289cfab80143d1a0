//! Schema-driven codec engine.
//!
//! [`encode`] packs a JSON value into a bitstream by walking a [`Schema`] and
//! renders the bytes as URL-safe text. [`decode`] walks the same schema to
//! read the value back. The engine has no knowledge of characters, weapons or
//! artifacts; everything it knows comes from the schema.
//!
//! For every value `v` that conforms to a schema `s`,
//! `decode(&encode(&v, s)?, s)? == v`. Values that do not conform are
//! rejected with the path of the offending field, never clamped.

mod bitstream;
mod error;
mod text;

pub use error::{CodecError, CodecErrorKind, FieldPath, PathSegment};
pub use text::is_payload_char;

use serde_json::{Map, Number, Value};

use crate::schema::{enum_index_bits, Schema};
use bitstream::{BitReader, BitWriter};

/// Longest string, array or map the codec will write or accept
pub const MAX_LENGTH: u64 = 1 << 12;

/// Largest magnitude a scaled decimal may reach (exactly representable in f64)
const MAX_SCALED_DECIMAL: f64 = 9_007_199_254_740_992.0;

/// Encode a value as URL-safe text according to `schema`
pub fn encode(value: &Value, schema: &Schema) -> Result<String, CodecError> {
    let mut writer = BitWriter::new();
    write_value(&mut writer, Some(value), schema)?;
    Ok(text::encode_text(&writer.finish()))
}

/// Decode URL-safe text back into a value according to `schema`
pub fn decode(text: &str, schema: &Schema) -> Result<Value, CodecError> {
    let bytes = text::decode_text(text)?;
    let mut reader = BitReader::new(bytes);
    let value = read_value(&mut reader, schema)?.unwrap_or(Value::Null);

    // Only the zero padding up to the next byte boundary may remain
    let remaining = reader.remaining_bits();
    if remaining >= 8 || reader.read_bits(remaining)? != 0 {
        return Err(CodecErrorKind::TrailingData { bits: remaining }.into());
    }

    Ok(value)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

fn write_value(
    writer: &mut BitWriter,
    value: Option<&Value>,
    schema: &Schema,
) -> Result<(), CodecError> {
    if let Schema::Optional(inner) = schema {
        return match value {
            None | Some(Value::Null) => {
                writer.write_bool(false);
                Ok(())
            }
            Some(present) => {
                writer.write_bool(true);
                write_value(writer, Some(present), inner)
            }
        };
    }

    let value = value.ok_or(CodecErrorKind::MissingField)?;

    match schema {
        Schema::Bool => {
            let flag = value
                .as_bool()
                .ok_or(CodecErrorKind::TypeMismatch { expected: "boolean" })?;
            writer.write_bool(flag);
        }
        Schema::Uint { bits } => {
            let n = expect_u64(value)?;
            if *bits < 64 && n >> bits != 0 {
                return Err(CodecErrorKind::Overflow { value: n, bits: *bits }.into());
            }
            writer.write_bits(n, usize::from(*bits));
        }
        Schema::VarUint => writer.write_varuint(expect_u64(value)?),
        Schema::Decimal { scale } => writer.write_varuint(zigzag(scale_decimal(value, *scale)?)),
        Schema::Enum(keys) => write_enum(writer, value, keys)?,
        Schema::Str => write_str(writer, value)?,
        Schema::Object(fields) => {
            let object = value
                .as_object()
                .ok_or(CodecErrorKind::TypeMismatch { expected: "object" })?;
            for (name, field) in fields.iter() {
                write_value(writer, object.get(*name), field)
                    .map_err(|e| e.within(PathSegment::Field(*name)))?;
            }
        }
        Schema::Array(item) => {
            let items = value
                .as_array()
                .ok_or(CodecErrorKind::TypeMismatch { expected: "array" })?;
            write_length(writer, items.len())?;
            for (i, element) in items.iter().enumerate() {
                write_value(writer, Some(element), item)
                    .map_err(|e| e.within(PathSegment::Index(i)))?;
            }
        }
        Schema::Map { key, value: entry } => {
            let object = value
                .as_object()
                .ok_or(CodecErrorKind::TypeMismatch { expected: "object" })?;
            write_length(writer, object.len())?;

            let mut entries: Vec<(&String, &Value)> = object.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            for (name, element) in entries {
                let within = |e: CodecError| e.within(PathSegment::Key(name.clone()));
                write_map_key(writer, name, key).map_err(within)?;
                write_value(writer, Some(element), entry).map_err(within)?;
            }
        }
        Schema::Optional(_) => unreachable!("handled above"),
    }

    Ok(())
}

fn expect_u64(value: &Value) -> Result<u64, CodecError> {
    value.as_u64().ok_or_else(|| {
        CodecErrorKind::TypeMismatch {
            expected: "unsigned integer",
        }
        .into()
    })
}

/// Scale a decimal to an integer, refusing anything that would lose precision
fn scale_decimal(value: &Value, scale: u32) -> Result<i64, CodecError> {
    let x = value
        .as_f64()
        .ok_or(CodecErrorKind::TypeMismatch { expected: "number" })?;
    let factor = f64::from(scale.max(1));
    let rounded = (x * factor).round();

    // Accept only values that decode back to exactly `x`
    if !rounded.is_finite() || rounded.abs() > MAX_SCALED_DECIMAL || rounded / factor != x {
        return Err(CodecErrorKind::NotRepresentable { value: x, scale }.into());
    }
    Ok(rounded as i64)
}

fn zigzag(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

fn write_enum(writer: &mut BitWriter, value: &Value, keys: &[&str]) -> Result<(), CodecError> {
    let key = value
        .as_str()
        .ok_or(CodecErrorKind::TypeMismatch { expected: "string key" })?;
    let index = keys
        .iter()
        .position(|k| *k == key)
        .ok_or_else(|| CodecErrorKind::UnknownEnumKey(key.to_string()))?;
    writer.write_bits(index as u64, enum_index_bits(keys.len()));
    Ok(())
}

fn write_str(writer: &mut BitWriter, value: &Value) -> Result<(), CodecError> {
    let s = value
        .as_str()
        .ok_or(CodecErrorKind::TypeMismatch { expected: "string" })?;
    if !s.is_ascii() {
        return Err(CodecErrorKind::NonAscii(s.to_string()).into());
    }
    write_length(writer, s.len())?;
    for byte in s.bytes() {
        writer.write_bits(u64::from(byte), 7);
    }
    Ok(())
}

fn write_map_key(writer: &mut BitWriter, name: &str, key: &Schema) -> Result<(), CodecError> {
    let name = Value::String(name.to_string());
    match key {
        Schema::Str => write_str(writer, &name),
        Schema::Enum(keys) => write_enum(writer, &name, keys),
        _ => Err(CodecErrorKind::InvalidMapKey.into()),
    }
}

fn write_length(writer: &mut BitWriter, len: usize) -> Result<(), CodecError> {
    let len = len as u64;
    if len > MAX_LENGTH {
        return Err(CodecErrorKind::LengthOutOfRange {
            len,
            max: MAX_LENGTH,
        }
        .into());
    }
    writer.write_varuint(len);
    Ok(())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Read one field; `None` is an absent optional
fn read_value(reader: &mut BitReader, schema: &Schema) -> Result<Option<Value>, CodecError> {
    let value = match schema {
        Schema::Optional(inner) => {
            if !reader.read_bool()? {
                return Ok(None);
            }
            return read_value(reader, inner);
        }
        Schema::Bool => Value::Bool(reader.read_bool()?),
        Schema::Uint { bits } => Value::from(reader.read_bits(usize::from(*bits))?),
        Schema::VarUint => Value::from(reader.read_varuint()?),
        Schema::Decimal { scale } => unscale_decimal(unzigzag(reader.read_varuint()?), *scale),
        Schema::Enum(keys) => Value::String(read_enum(reader, keys)?.to_string()),
        Schema::Str => Value::String(read_str(reader)?),
        Schema::Object(fields) => {
            let mut object = Map::new();
            for (name, field) in fields.iter() {
                let read = read_value(reader, field)
                    .map_err(|e| e.within(PathSegment::Field(*name)))?;
                if let Some(v) = read {
                    object.insert(name.to_string(), v);
                }
            }
            Value::Object(object)
        }
        Schema::Array(item) => {
            let len = read_length(reader)?;
            let mut items = Vec::new();
            for i in 0..len {
                let element = read_value(reader, item)
                    .map_err(|e| e.within(PathSegment::Index(i)))?
                    .unwrap_or(Value::Null);
                items.push(element);
            }
            Value::Array(items)
        }
        Schema::Map { key, value: entry } => {
            let len = read_length(reader)?;
            let mut object = Map::new();
            for i in 0..len {
                let name = read_map_key(reader, key).map_err(|e| e.within(PathSegment::Index(i)))?;
                let within = |e: CodecError| e.within(PathSegment::Key(name.clone()));
                let element = read_value(reader, entry).map_err(within)?.unwrap_or(Value::Null);
                if object.insert(name.clone(), element).is_some() {
                    return Err(CodecError::new(CodecErrorKind::DuplicateMapKey(name.clone())));
                }
            }
            Value::Object(object)
        }
    };

    Ok(Some(value))
}

fn unzigzag(z: u64) -> i64 {
    ((z >> 1) as i64) ^ -((z & 1) as i64)
}

/// Whole values come back as integers so they compare equal to integer input
fn unscale_decimal(n: i64, scale: u32) -> Value {
    let scale = i64::from(scale.max(1));
    if n % scale == 0 {
        Value::from(n / scale)
    } else {
        Number::from_f64(n as f64 / scale as f64).map_or(Value::Null, Value::Number)
    }
}

fn read_enum(reader: &mut BitReader, keys: &[&'static str]) -> Result<&'static str, CodecError> {
    let index = reader.read_bits(enum_index_bits(keys.len()))?;
    usize::try_from(index)
        .ok()
        .and_then(|i| keys.get(i).copied())
        .ok_or_else(|| {
            CodecErrorKind::EnumIndexOutOfRange {
                index,
                len: keys.len(),
            }
            .into()
        })
}

fn read_str(reader: &mut BitReader) -> Result<String, CodecError> {
    let len = read_length(reader)?;
    let mut s = String::with_capacity(len);
    for _ in 0..len {
        // 7-bit values are always ASCII
        s.push(char::from(reader.read_bits(7)? as u8));
    }
    Ok(s)
}

fn read_map_key(reader: &mut BitReader, key: &Schema) -> Result<String, CodecError> {
    match key {
        Schema::Str => read_str(reader),
        Schema::Enum(keys) => read_enum(reader, keys).map(str::to_string),
        _ => Err(CodecErrorKind::InvalidMapKey.into()),
    }
}

fn read_length(reader: &mut BitReader) -> Result<usize, CodecError> {
    let len = reader.read_varuint()?;
    if len > MAX_LENGTH {
        return Err(CodecErrorKind::LengthOutOfRange {
            len,
            max: MAX_LENGTH,
        }
        .into());
    }
    Ok(len as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const COLORS: &[&str] = &["red", "green", "blue"];

    static POINT: Schema = Schema::Object(&[
        ("x", Schema::Uint { bits: 8 }),
        ("y", Schema::Uint { bits: 8 }),
        ("color", Schema::Optional(&Schema::Enum(COLORS))),
    ]);

    static SHAPE: Schema = Schema::Object(&[
        ("name", Schema::Str),
        ("closed", Schema::Bool),
        ("points", Schema::Array(&POINT)),
        ("weight", Schema::Decimal { scale: 10 }),
        ("id", Schema::VarUint),
        (
            "tags",
            Schema::Map {
                key: &Schema::Enum(COLORS),
                value: &Schema::Str,
            },
        ),
    ]);

    fn shape() -> Value {
        json!({
            "name": "triangle",
            "closed": true,
            "points": [
                { "x": 0, "y": 0, "color": "red" },
                { "x": 10, "y": 0 },
                { "x": 5, "y": 255, "color": "blue" },
            ],
            "weight": -12.5,
            "id": 70000,
            "tags": { "green": "fill", "blue": "edge" },
        })
    }

    #[test]
    fn test_roundtrip() {
        let value = shape();
        let text = encode(&value, &SHAPE).unwrap();
        assert_eq!(decode(&text, &SHAPE).unwrap(), value);
    }

    #[test]
    fn test_output_is_url_safe() {
        let text = encode(&shape(), &SHAPE).unwrap();
        assert!(!text.is_empty());
        assert!(text.chars().all(is_payload_char), "{}", text);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = encode(&shape(), &SHAPE).unwrap();
        let b = encode(&shape(), &SHAPE).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_outside_schema_are_ignored() {
        let mut value = shape();
        value["extra"] = json!("not on the wire");
        let text = encode(&value, &SHAPE).unwrap();
        assert_eq!(decode(&text, &SHAPE).unwrap(), shape());
    }

    #[test]
    fn test_null_optional_is_absent() {
        let value = json!({ "x": 1, "y": 2, "color": null });
        let text = encode(&value, &POINT).unwrap();
        assert_eq!(decode(&text, &POINT).unwrap(), json!({ "x": 1, "y": 2 }));
    }

    #[test]
    fn test_unknown_enum_key_fails_with_path() {
        let mut value = shape();
        value["points"][2]["color"] = json!("purple");
        let err = encode(&value, &SHAPE).unwrap_err();

        assert_eq!(err.kind(), &CodecErrorKind::UnknownEnumKey("purple".into()));
        assert_eq!(err.path().to_string(), "points[2].color");
    }

    #[test]
    fn test_overflow_is_rejected() {
        let err = encode(&json!({ "x": 256, "y": 0 }), &POINT).unwrap_err();
        assert_eq!(err.kind(), &CodecErrorKind::Overflow { value: 256, bits: 8 });
        assert_eq!(err.path().to_string(), "x");
    }

    #[test]
    fn test_missing_field() {
        let err = encode(&json!({ "x": 1 }), &POINT).unwrap_err();
        assert_eq!(err.kind(), &CodecErrorKind::MissingField);
        assert_eq!(err.path().to_string(), "y");
    }

    #[test]
    fn test_type_mismatch() {
        let err = encode(&json!({ "x": "one", "y": 0 }), &POINT).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::TypeMismatch { .. }));

        let err = encode(&json!({ "x": -1, "y": 0 }), &POINT).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn test_decimal_precision_is_not_truncated() {
        static WEIGHT: Schema = Schema::Decimal { scale: 10 };
        assert_eq!(decode(&encode(&json!(3.9), &WEIGHT).unwrap(), &WEIGHT).unwrap(), json!(3.9));
        assert_eq!(decode(&encode(&json!(16), &WEIGHT).unwrap(), &WEIGHT).unwrap(), json!(16));

        let err = encode(&json!(3.14), &WEIGHT).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::NotRepresentable { .. }));
    }

    #[test]
    fn test_decimal_near_misses_are_rejected() {
        static TENTHS: Schema = Schema::Decimal { scale: 10 };
        static HUNDREDTHS: Schema = Schema::Decimal { scale: 100 };

        for (value, schema) in [
            (1000.0004, &HUNDREDTHS),
            (3.900001, &TENTHS),
            (0.30000000000000004, &TENTHS),
        ] {
            let err = encode(&json!(value), schema).unwrap_err();
            assert!(
                matches!(err.kind(), CodecErrorKind::NotRepresentable { .. }),
                "{} was accepted",
                value
            );
        }

        // Products that land just off an integer still decode exactly
        for value in [5.8, 0.3, -12.5, 1200.0] {
            let text = encode(&json!(value), &TENTHS).unwrap();
            assert_eq!(decode(&text, &TENTHS).unwrap().as_f64(), Some(value));
        }
    }

    #[test]
    fn test_non_ascii_string() {
        let err = encode(&json!("café"), &Schema::Str).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::NonAscii(_)));
    }

    #[test]
    fn test_map_keys_must_be_strings_or_enums() {
        static BAD: Schema = Schema::Map {
            key: &Schema::Bool,
            value: &Schema::Bool,
        };
        let err = encode(&json!({ "a": true }), &BAD).unwrap_err();
        assert_eq!(err.kind(), &CodecErrorKind::InvalidMapKey);
    }

    #[test]
    fn test_enum_index_out_of_range_on_decode() {
        // Two bits hold indices 0..=3 but only three colors exist
        let mut writer = BitWriter::new();
        writer.write_bits(5, 8); // x
        writer.write_bits(6, 8); // y
        writer.write_bool(true); // color present
        writer.write_bits(3, 2); // index 3
        let text = text::encode_text(&writer.finish());

        let err = decode(&text, &POINT).unwrap_err();
        assert_eq!(
            err.kind(),
            &CodecErrorKind::EnumIndexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(err.path().to_string(), "color");
    }

    #[test]
    fn test_truncated_payload() {
        let full = encode(&shape(), &SHAPE).unwrap();
        let mut bytes = text::decode_text(&full).unwrap();
        bytes.truncate(bytes.len() / 2);
        let err = decode(&text::encode_text(&bytes), &SHAPE).unwrap_err();
        assert_eq!(err.kind(), &CodecErrorKind::Truncated);
        assert!(!err.path().is_root());
    }

    #[test]
    fn test_trailing_data() {
        let text = encode(&json!({ "x": 1, "y": 2 }), &POINT).unwrap();
        let padded = format!("{}AAAA", text);
        let err = decode(&padded, &POINT).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::TrailingData { .. }));
    }

    #[test]
    fn test_invalid_text() {
        let err = decode("a=b&c", &POINT).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::InvalidText(_)));
    }

    #[test]
    fn test_huge_length_prefix_is_rejected() {
        let mut writer = BitWriter::new();
        writer.write_varuint(MAX_LENGTH + 1);
        let text = text::encode_text(&writer.finish());
        let err = decode(&text, &Schema::Str).unwrap_err();
        assert!(matches!(err.kind(), CodecErrorKind::LengthOutOfRange { .. }));
    }

    #[test]
    fn test_duplicate_map_key() {
        static TAGS: Schema = Schema::Map {
            key: &Schema::Enum(COLORS),
            value: &Schema::Bool,
        };
        let mut writer = BitWriter::new();
        writer.write_varuint(2);
        writer.write_bits(1, 2);
        writer.write_bool(true);
        writer.write_bits(1, 2);
        writer.write_bool(false);
        let text = text::encode_text(&writer.finish());

        let err = decode(&text, &TAGS).unwrap_err();
        assert_eq!(err.kind(), &CodecErrorKind::DuplicateMapKey("green".into()));
    }
}
