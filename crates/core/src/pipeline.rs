//! The full encoding pipeline: symbols → frequencies → tree → codes → bits.
//!
//! Each call owns all of its intermediate state, so independent inputs can
//! be encoded concurrently without coordination.

use log::debug;

use crate::artifact::{parse_frequency_file, write_frequency_file};
use crate::code::{expected_bit_len, CodeTable};
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::pack::{pack, PackedBitstream};
use crate::stats::CompressionStats;
use crate::symbol::Symbol;
use crate::tree::{build_tree, TieBreak};

/// Result of encoding one input.
///
/// The tree is dropped once codes are generated; only the table needed to
/// rebuild it is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S> {
    pub frequencies: FrequencyTable<S>,
    pub codes: CodeTable<S>,
    pub packed: PackedBitstream,
}

/// The two files emitted per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Contents of the frequency file
    pub frequency_file: String,
    /// Contents of the compressed file
    pub compressed: Vec<u8>,
}

impl<S: Symbol> Encoded<S> {
    pub fn frequency_file(&self) -> String {
        write_frequency_file(&self.frequencies)
    }

    pub fn compressed(&self) -> &[u8] {
        self.packed.bytes()
    }

    pub fn artifacts(&self) -> Artifacts {
        Artifacts {
            frequency_file: self.frequency_file(),
            compressed: self.packed.bytes().to_vec(),
        }
    }

    /// Statistics for an original input of `original_bytes` bytes.
    pub fn stats(&self, original_bytes: u64) -> CompressionStats {
        CompressionStats::new(original_bytes, &self.frequencies, &self.codes, &self.packed)
    }
}

/// Encode `symbols`, deriving the frequency table from them.
///
/// # Errors
/// `HuffmanError::EmptyInput` if `symbols` is empty.
pub fn encode<S: Symbol>(symbols: &[S], tie_break: TieBreak) -> Result<Encoded<S>> {
    let frequencies = FrequencyTable::from_symbols(symbols.iter().cloned());
    encode_checked(symbols, frequencies, tie_break)
}

/// Encode `symbols` with a code derived from an externally supplied table.
///
/// # Errors
/// - `HuffmanError::IncompleteFrequencyTable` if `frequencies` misses a
///   symbol of the input
/// - `HuffmanError::EmptyInput` if `frequencies` is empty
pub fn encode_with_frequencies<S: Symbol>(
    symbols: &[S],
    frequencies: &FrequencyTable<S>,
    tie_break: TieBreak,
) -> Result<Encoded<S>> {
    frequencies.ensure_covers(symbols)?;
    encode_checked(symbols, frequencies.clone(), tie_break)
}

fn encode_checked<S: Symbol>(
    symbols: &[S],
    frequencies: FrequencyTable<S>,
    tie_break: TieBreak,
) -> Result<Encoded<S>> {
    let tree = build_tree(&frequencies, tie_break)?;
    let codes = CodeTable::from_tree(&tree);
    drop(tree);

    let packed = pack(symbols, &codes)?;
    Ok(Encoded {
        frequencies,
        codes,
        packed,
    })
}

/// Encode a text as a sequence of characters.
pub fn encode_text(text: &str, tie_break: TieBreak) -> Result<Encoded<char>> {
    let symbols: Vec<char> = text.chars().collect();
    encode(&symbols, tie_break)
}

/// Check a pair of artifacts for consistency.
///
/// Rebuilds the code from the frequency file and verifies that the
/// compressed file has exactly `ceil(bits / 8)` bytes. Returns the number of
/// meaningful bits.
///
/// # Errors
/// - frequency file parse errors
/// - `HuffmanError::LengthMismatch` if the compressed length is wrong
pub fn verify_artifacts<S: Symbol>(
    frequency_file: &str,
    compressed: &[u8],
    tie_break: TieBreak,
) -> Result<u64> {
    let frequencies: FrequencyTable<S> = parse_frequency_file(frequency_file)?;
    let tree = build_tree(&frequencies, tie_break)?;
    let codes = CodeTable::from_tree(&tree);

    let bits = expected_bit_len(&frequencies, &codes)?;
    let expected = bits.div_ceil(8) as usize;
    if expected != compressed.len() {
        return Err(HuffmanError::LengthMismatch {
            expected,
            actual: compressed.len(),
        }
        .into());
    }

    debug!(
        "verified artifacts: {} symbols, {} bits, {} bytes",
        frequencies.total(),
        bits,
        expected
    );
    Ok(bits)
}
