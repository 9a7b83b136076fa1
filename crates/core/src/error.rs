//! Error types for the huffpack encoder.
//!
//! Every failure here is a local construction invariant: nothing is
//! transient, so all operations fail fast with a descriptive error and
//! never produce partial output.

use thiserror::Error;

/// Top-level error type for all operations in the crate.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: tree construction, code lookup, table coverage
/// - Frequency file: parsing the line-oriented frequency artifact
/// - I/O: file system operations performed by callers
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman construction or encoding error
    #[error("huffman error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Frequency file could not be parsed
    #[error("frequency file error: {0}")]
    FrequencyFile(#[from] FrequencyFileError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Huffman codec errors.
///
/// Symbols are carried in their `Debug` rendering so the error type stays
/// independent of the symbol type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// No symbols to build a tree from
    #[error("empty input: no symbols to build a Huffman tree from")]
    EmptyInput,

    /// A symbol has no generated code
    #[error("no code for symbol {symbol}")]
    MissingCode { symbol: String },

    /// A frequency table does not cover a symbol present in the input
    #[error("frequency table has no entry for symbol {symbol}")]
    IncompleteFrequencyTable { symbol: String },

    /// Compressed length disagrees with the length implied by the frequencies
    #[error("compressed length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Frequency file parsing errors. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrequencyFileError {
    /// The file has no header line
    #[error("missing header line")]
    MissingHeader,

    /// The header is not a decimal symbol count
    #[error("invalid header {0:?}: expected the number of distinct symbols")]
    InvalidHeader(String),

    /// A line does not have the `<symbol> <count>` shape
    #[error("line {line}: expected `<symbol> <count>`")]
    MalformedLine { line: usize },

    /// The count field is not a decimal integer
    #[error("line {line}: invalid count {value:?}")]
    InvalidCount { line: usize, value: String },

    /// The symbol field does not encode exactly one symbol
    #[error("line {line}: invalid symbol {value:?}")]
    InvalidSymbol { line: usize, value: String },

    /// The same symbol appears on two lines
    #[error("line {line}: duplicate symbol {value:?}")]
    DuplicateSymbol { line: usize, value: String },

    /// A symbol was listed with a zero count
    #[error("line {line}: zero count for symbol {value:?}")]
    ZeroCount { line: usize, value: String },

    /// The header count disagrees with the number of entries
    #[error("header declares {declared} symbols, found {actual}")]
    CountMismatch { declared: usize, actual: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
