//! Bit-level output for packing Huffman codes.
//!
//! [`BitWriter`] appends bits MSB-first: the first bit written lands in the
//! most significant bit of the first byte.
//!
//! # Padding
//! The final partial byte is completed with trailing (low-order) zero bits.
//! The writer does not record how many bits are padding; callers recover the
//! exact bit count from the frequency table.
//!
//! # Example
//! ```
//! use huffpack_core::bitio::BitWriter;
//! use huffpack_core::Code;
//!
//! let mut writer = BitWriter::new();
//! writer.write_code(&Code::from_bit_str("101").unwrap());
//! writer.write_bit(true);
//! writer.write_bit(true);
//! // Total: 10111 -> padded to 10111000
//!
//! assert_eq!(writer.bit_len(), 5);
//! assert_eq!(writer.finish(), vec![0b10111000]);
//! ```

use crate::code::Code;

/// Writes bits MSB-first into a byte buffer.
///
/// # Invariants
/// - `bit_count` is always < 8
/// - bits of `bit_buffer` below the first `bit_count` are zero
#[derive(Debug, Clone)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Current partial byte, filled from the MSB down
    bit_buffer: u8,
    /// Number of bits in bit_buffer (0-7)
    bit_count: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a BitWriter that can hold `bits` bits without reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Append one bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.bit_buffer |= 0x80 >> self.bit_count;
        }
        self.bit_count += 1;

        if self.bit_count == 8 {
            self.bytes.push(self.bit_buffer);
            self.bit_buffer = 0;
            self.bit_count = 0;
        }
    }

    /// Append every bit of `code`, first bit first.
    pub fn write_code(&mut self, code: &Code) {
        for &bit in code.bits() {
            self.write_bit(bit);
        }
    }

    /// Consume the writer and return the bytes, the last one zero-padded.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_count > 0 {
            self.bytes.push(self.bit_buffer);
        }
        self.bytes
    }

    /// Number of complete bytes written so far.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Total number of bits written, partial byte included.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.bit_count as usize
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(bits: &str) -> Code {
        Code::from_bit_str(bits).unwrap()
    }

    #[test]
    fn test_full_byte() {
        let mut writer = BitWriter::new();
        writer.write_code(&code("10110011"));

        assert_eq!(writer.byte_len(), 1);
        assert_eq!(writer.finish(), vec![0b10110011]);
    }

    #[test]
    fn test_padding() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        assert_eq!(writer.bit_len(), 1);
        assert_eq!(writer.byte_len(), 0);

        assert_eq!(writer.finish(), vec![0b10000000]);
    }

    #[test]
    fn test_empty() {
        let mut writer = BitWriter::default();
        writer.write_code(&Code::new());
        assert_eq!(writer.bit_len(), 0);
        assert!(writer.finish().is_empty());
    }

    #[test]
    fn test_bit_by_bit() {
        let mut writer = BitWriter::new();
        for bit in [true, false, true, true, false, false, true, false] {
            writer.write_bit(bit);
        }
        assert_eq!(writer.finish(), vec![0b10110010]);
    }

    #[test]
    fn test_write_code_across_bytes() {
        let mut writer = BitWriter::with_capacity(12);
        writer.write_code(&code("111111"));
        writer.write_code(&code("000011"));

        assert_eq!(writer.bit_len(), 12);
        assert_eq!(writer.finish(), vec![0b11111100, 0b00110000]);
    }

    #[test]
    fn test_long_code() {
        // Codes may exceed 64 bits on skewed distributions
        let long = "1".repeat(70);
        let mut writer = BitWriter::new();
        writer.write_code(&code(&long));

        let bytes = writer.finish();
        assert_eq!(bytes.len(), 9);
        assert!(bytes[..8].iter().all(|&b| b == 0xFF));
        assert_eq!(bytes[8], 0b11000000);
    }

    #[test]
    fn test_mixed_writes() {
        let mut writer = BitWriter::new();
        writer.write_bit(true);
        writer.write_code(&code("0110"));
        writer.write_code(&code("1001"));

        // 1 0110 1001 -> 10110100 1(0000000)
        assert_eq!(writer.finish(), vec![0b10110100, 0b10000000]);
    }
}
