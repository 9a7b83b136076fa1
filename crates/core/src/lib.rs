//! huffpack-core: static Huffman encoding with reproducible output
//!
//! This library turns a symbol sequence into two artifacts:
//! - a packed bitstream of per-symbol Huffman codes
//! - a frequency table sufficient to rebuild the same code later
//!
//! # Architecture
//!
//! Data flows strictly left to right: text → frequencies → tree → codes →
//! packed bytes.
//! - `symbol`: the alphabet abstraction (`char`, `u8`)
//! - `frequency`: frequency analysis with a hash-independent order
//! - `tree`: greedy-merge tree construction with explicit tie-breaking
//! - `code`: root-to-leaf code generation
//! - `bitio`: MSB-first bit writing
//! - `pack`: bit packing with trailing zero padding
//! - `artifact`: the frequency file format
//! - `pipeline`: the end-to-end encoder
//! - `stats`: compression statistics
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and fail fast
//! - **Deterministic**: identical inputs give byte-identical artifacts
//! - **No shared state**: each input is encoded independently
//!
//! # Example
//! ```
//! use huffpack_core::{encode_text, TieBreak};
//!
//! let encoded = encode_text("abracadabra", TieBreak::Reference).unwrap();
//! assert_eq!(encoded.frequency_file(), "5\nc 1\nd 1\nb 2\nr 2\na 5\n");
//! assert_eq!(encoded.compressed(), &[0x79, 0x8D, 0x78]);
//! ```

pub mod artifact;
pub mod bitio;
pub mod code;
pub mod error;
pub mod frequency;
pub mod pack;
pub mod pipeline;
pub mod stats;
pub mod symbol;
pub mod tree;

// Re-export commonly used types
pub use code::{Code, CodeTable};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use pack::PackedBitstream;
pub use pipeline::{encode, encode_text, encode_with_frequencies, verify_artifacts, Artifacts, Encoded};
pub use stats::CompressionStats;
pub use symbol::Symbol;
pub use tree::{build_tree, HuffmanTree, Node, TieBreak};
