//! Compression statistics.
//!
//! Everything here is computed from values the pipeline already produced;
//! nothing is measured.

use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::pack::PackedBitstream;
use crate::symbol::Symbol;

/// Summary of one encoded input.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Size of the original input in bytes
    pub original_bytes: u64,

    /// Size of the compressed file in bytes
    pub compressed_bytes: u64,

    /// Number of symbols in the input
    pub symbol_count: u64,

    /// Number of distinct symbols
    pub alphabet_size: usize,

    /// Meaningful bits in the compressed file
    pub payload_bits: u64,

    /// Mean code length over the alphabet (each symbol counted once)
    pub average_code_length: f64,

    /// Mean code length over the input (bits per symbol)
    pub weighted_code_length: f64,

    /// Longest code
    pub max_code_length: usize,
}

impl CompressionStats {
    /// Collect statistics for an input of `original_bytes` bytes.
    pub fn new<S: Symbol>(
        original_bytes: u64,
        freqs: &FrequencyTable<S>,
        codes: &CodeTable<S>,
        packed: &PackedBitstream,
    ) -> Self {
        let average_code_length = if codes.is_empty() {
            0.0
        } else {
            let total: usize = codes.iter().map(|(_, code)| code.len()).sum();
            round4(total as f64 / codes.len() as f64)
        };

        let symbol_count = freqs.total();
        let weighted_code_length = if symbol_count == 0 {
            0.0
        } else {
            round4(packed.bit_len() as f64 / symbol_count as f64)
        };

        Self {
            original_bytes,
            compressed_bytes: packed.byte_len() as u64,
            symbol_count,
            alphabet_size: freqs.len(),
            payload_bits: packed.bit_len(),
            average_code_length,
            weighted_code_length,
            max_code_length: codes.max_len(),
        }
    }

    /// Space saved, as a percentage of the original size.
    ///
    /// `1 - compressed / original`, rounded to four decimals before scaling.
    /// Returns 0.0 for an empty original.
    pub fn compression_rate(&self) -> f64 {
        if self.original_bytes == 0 {
            0.0
        } else {
            round4(1.0 - self.compressed_bytes as f64 / self.original_bytes as f64) * 100.0
        }
    }

    /// Human-readable report.
    pub fn summary(&self, name: &str) -> String {
        format!(
            "Results for {name}:\n\
             \x20 Original:   {} bytes ({} symbols, {} distinct)\n\
             \x20 Compressed: {} bytes ({} bits + {} padding)\n\
             \x20 Compression rate: {:.2}%\n\
             \x20 Average bits per character: {}\n\
             \x20 Bits per input symbol: {}\n",
            self.original_bytes,
            self.symbol_count,
            self.alphabet_size,
            self.compressed_bytes,
            self.payload_bits,
            self.compressed_bytes * 8 - self.payload_bits,
            self.compression_rate(),
            self.average_code_length,
            self.weighted_code_length,
        )
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "original_bytes={}\n\
             compressed_bytes={}\n\
             symbol_count={}\n\
             alphabet_size={}\n\
             payload_bits={}\n\
             compression_rate={:.2}\n\
             average_code_length={:.4}\n\
             weighted_code_length={:.4}\n\
             max_code_length={}\n",
            self.original_bytes,
            self.compressed_bytes,
            self.symbol_count,
            self.alphabet_size,
            self.payload_bits,
            self.compression_rate(),
            self.average_code_length,
            self.weighted_code_length,
            self.max_code_length,
        )
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
