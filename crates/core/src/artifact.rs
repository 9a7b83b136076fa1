//! The frequency file format.
//!
//! ```text
//! 5          <- number of distinct symbols
//! c 1        <- `<symbol> <count>`, in (count, symbol) ascending order
//! d 1
//! b 2
//! r 2
//! a 5
//! ```
//!
//! The newline symbol is written as the two characters `\n`. Every line,
//! including the last, ends with a line feed. The symbol field is everything
//! before the last space, so the space symbol itself reads back unambiguously.
//!
//! The compressed file needs no helper: it is the raw packed bitstream, with
//! no header, length prefix or magic number.

use std::collections::BTreeMap;

use crate::error::{FrequencyFileError, Result};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;

/// Render `freqs` as a frequency file.
pub fn write_frequency_file<S: Symbol>(freqs: &FrequencyTable<S>) -> String {
    let mut out = format!("{}\n", freqs.len());
    for (symbol, count) in freqs.iter() {
        out.push_str(&symbol.escape());
        out.push(' ');
        out.push_str(&count.to_string());
        out.push('\n');
    }
    out
}

/// Parse a frequency file back into a table.
///
/// Entries may appear in any order; the returned table is in canonical
/// order.
///
/// # Errors
/// A `FrequencyFileError` describing the first problem found.
pub fn parse_frequency_file<S: Symbol>(text: &str) -> Result<FrequencyTable<S>> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    if body.is_empty() {
        return Err(FrequencyFileError::MissingHeader.into());
    }

    let mut lines = body.split('\n');
    let header = lines.next().ok_or(FrequencyFileError::MissingHeader)?;
    let declared: usize = header
        .trim()
        .parse()
        .map_err(|_| FrequencyFileError::InvalidHeader(header.to_string()))?;

    let mut counts: BTreeMap<S, u64> = BTreeMap::new();
    for (idx, line) in lines.enumerate() {
        let line_no = idx + 2;
        let (field, count) = line
            .rsplit_once(' ')
            .ok_or(FrequencyFileError::MalformedLine { line: line_no })?;

        let count: u64 = count.parse().map_err(|_| FrequencyFileError::InvalidCount {
            line: line_no,
            value: count.to_string(),
        })?;
        let symbol = S::unescape(field).ok_or_else(|| FrequencyFileError::InvalidSymbol {
            line: line_no,
            value: field.to_string(),
        })?;
        if count == 0 {
            return Err(FrequencyFileError::ZeroCount {
                line: line_no,
                value: field.to_string(),
            }
            .into());
        }
        if counts.insert(symbol, count).is_some() {
            return Err(FrequencyFileError::DuplicateSymbol {
                line: line_no,
                value: field.to_string(),
            }
            .into());
        }
    }

    if counts.len() != declared {
        return Err(FrequencyFileError::CountMismatch {
            declared,
            actual: counts.len(),
        }
        .into());
    }

    Ok(FrequencyTable::from_counts(counts))
}
