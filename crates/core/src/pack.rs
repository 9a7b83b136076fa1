//! Bit packing of an encoded symbol sequence.

use log::debug;

use crate::bitio::BitWriter;
use crate::code::CodeTable;
use crate::error::Result;
use crate::symbol::Symbol;

/// The concatenated codes of an input, packed MSB-first.
///
/// `bytes` is exactly what goes into the compressed file; `bit_len` is kept
/// in memory only, the file format carries no length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitstream {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl PackedBitstream {
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of meaningful bits, padding excluded.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Number of zero bits appended to complete the last byte (0-7).
    pub fn padding_bits(&self) -> u8 {
        ((8 - self.bit_len % 8) % 8) as u8
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Pack the codes of `symbols`, in order.
///
/// # Errors
/// `HuffmanError::MissingCode` if a symbol has no entry in `codes`.
pub fn pack<S: Symbol>(symbols: &[S], codes: &CodeTable<S>) -> Result<PackedBitstream> {
    let mut bit_len = 0u64;
    for symbol in symbols {
        bit_len += codes.code(symbol)?.len() as u64;
    }

    let mut writer = BitWriter::with_capacity(bit_len as usize);
    for symbol in symbols {
        writer.write_code(codes.code(symbol)?);
    }
    let bytes = writer.finish();

    debug!(
        "packed {} symbols into {} bits ({} bytes)",
        symbols.len(),
        bit_len,
        bytes.len()
    );
    Ok(PackedBitstream { bytes, bit_len })
}
