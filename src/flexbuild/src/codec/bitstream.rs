//! Bitstream reader and writer for schema-driven field packing.

use super::CodecErrorKind;

/// Longest VarUint on the wire: 16 nibbles cover a full u64
const MAX_VARUINT_NIBBLES: usize = 16;

/// Bitstream writer, MSB-first within each byte
pub(crate) struct BitWriter {
    bytes: Vec<u8>,
    bit_offset: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_offset: 0,
        }
    }

    /// Write the low `count` bits of `value` (MSB-first)
    pub fn write_bits(&mut self, value: u64, count: usize) {
        for i in (0..count).rev() {
            let bit = ((value >> i) & 1) as u8;
            let byte_idx = self.bit_offset / 8;
            let bit_idx = 7 - (self.bit_offset % 8);

            while byte_idx >= self.bytes.len() {
                self.bytes.push(0);
            }

            if bit == 1 {
                self.bytes[byte_idx] |= 1 << bit_idx;
            }
            self.bit_offset += 1;
        }
    }

    pub fn write_bool(&mut self, value: bool) {
        self.write_bits(u64::from(value), 1);
    }

    /// Write a VarUint (4-bit nibbles with continuation bits)
    /// Format: [4-bit value][1-bit continuation]... Values assembled LSB-first.
    pub fn write_varuint(&mut self, value: u64) {
        let mut remaining = value;

        loop {
            let nibble = remaining & 0xF;
            remaining >>= 4;

            self.write_bits(nibble, 4);

            if remaining == 0 {
                self.write_bits(0, 1);
                break;
            }
            self.write_bits(1, 1);
        }
    }

    /// Get the final bytes (zero-padded to a byte boundary)
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Bitstream reader, the mirror of [`BitWriter`]
pub(crate) struct BitReader {
    bytes: Vec<u8>,
    bit_offset: usize,
}

impl BitReader {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            bit_offset: 0,
        }
    }

    /// Read `count` bits as a u64 value (first bit = MSB)
    pub fn read_bits(&mut self, count: usize) -> Result<u64, CodecErrorKind> {
        debug_assert!(count <= 64);
        if count > self.remaining_bits() {
            return Err(CodecErrorKind::Truncated);
        }

        let mut result = 0u64;
        for _ in 0..count {
            let byte_idx = self.bit_offset / 8;
            let bit_idx = 7 - (self.bit_offset % 8);

            let bit = (self.bytes[byte_idx] >> bit_idx) & 1;
            result = (result << 1) | u64::from(bit);
            self.bit_offset += 1;
        }

        Ok(result)
    }

    pub fn read_bool(&mut self) -> Result<bool, CodecErrorKind> {
        Ok(self.read_bits(1)? == 1)
    }

    /// Read a VarUint. Continuation bit 1 = more nibbles follow, 0 = stop.
    pub fn read_varuint(&mut self) -> Result<u64, CodecErrorKind> {
        let mut result = 0u64;

        for i in 0..MAX_VARUINT_NIBBLES {
            let nibble = self.read_bits(4)?;
            result |= nibble << (i * 4);

            if self.read_bits(1)? == 0 {
                return Ok(result);
            }
        }

        Err(CodecErrorKind::Overlong)
    }

    /// Returns the number of bits remaining in the stream
    pub fn remaining_bits(&self) -> usize {
        let total_bits = self.bytes.len() * 8;
        total_bits.saturating_sub(self.bit_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_varuint_roundtrip() {
        for value in [0u64, 1, 15, 16, 255, 1000, 65535, 1 << 40, u64::MAX] {
            let mut writer = BitWriter::new();
            writer.write_varuint(value);
            let bytes = writer.finish();

            let mut reader = BitReader::new(bytes);
            let read_value = reader.read_varuint().unwrap();
            assert_eq!(read_value, value, "VarUint roundtrip failed for {}", value);
        }
    }

    #[test]
    fn test_varuint_small_values_take_five_bits() {
        let mut writer = BitWriter::new();
        writer.write_varuint(9);
        // 1001 + stop bit, padded
        assert_eq!(writer.finish(), vec![0b1001_0000]);
    }

    #[test]
    fn test_bits_roundtrip() {
        let mut writer = BitWriter::new();
        writer.write_bits(0b1010, 4);
        writer.write_bits(0b11111111, 8);
        writer.write_bool(true);
        writer.write_bits(0b101, 3);
        let bytes = writer.finish();

        let mut reader = BitReader::new(bytes);
        assert_eq!(reader.read_bits(4), Ok(0b1010));
        assert_eq!(reader.read_bits(8), Ok(0b11111111));
        assert_eq!(reader.read_bool(), Ok(true));
        assert_eq!(reader.read_bits(3), Ok(0b101));
    }

    #[test]
    fn test_read_past_end_is_truncated() {
        let mut reader = BitReader::new(vec![0xFF]);
        assert_eq!(reader.read_bits(6), Ok(0b111111));
        assert_eq!(reader.read_bits(3), Err(CodecErrorKind::Truncated));
    }

    #[test]
    fn test_overlong_varuint() {
        // Every nibble claims a continuation
        let mut reader = BitReader::new(vec![0xFF; 16]);
        assert_eq!(reader.read_varuint(), Err(CodecErrorKind::Overlong));
    }

    #[test]
    fn test_remaining_bits() {
        let reader = BitReader::new(vec![0xFF, 0xFF]);
        assert_eq!(reader.remaining_bits(), 16);
    }
}
