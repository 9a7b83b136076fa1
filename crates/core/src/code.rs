//! Code generation from a Huffman tree.
//!
//! A symbol's code is the sequence of edge bits on the path from the root
//! to its leaf (left = `0`, right = `1`), so the resulting code set is
//! prefix-free by construction. The lone-leaf tree is the one exception to
//! "code = path": it has no edges, and its symbol gets the 1-bit code `0`.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;
use crate::tree::{HuffmanTree, Node};

/// A variable-length bit code, first bit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Parse a string of `'0'`/`'1'` characters.
    pub fn from_bit_str(s: &str) -> Option<Self> {
        s.chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect::<Option<Vec<bool>>>()
            .map(|bits| Self { bits })
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Mapping from symbol to its code, ordered by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S> {
    codes: BTreeMap<S, Code>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive the code table of `tree`.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Self {
        let mut codes = BTreeMap::new();

        match tree.root() {
            Node::Leaf { symbol, .. } => {
                let mut code = Code::new();
                code.push(false);
                codes.insert(symbol.clone(), code);
            }
            root => {
                let mut path = Code::new();
                collect(root, &mut path, &mut codes);
            }
        }

        let table = Self { codes };
        debug!(
            "generated {} codes, max length {}",
            table.len(),
            table.max_len()
        );
        if log::log_enabled!(log::Level::Trace) {
            for (symbol, code) in table.iter() {
                trace!("code {:?} -> {}", symbol, code);
            }
        }
        table
    }

    /// Code of `symbol`.
    ///
    /// # Errors
    /// `HuffmanError::MissingCode` if the symbol has no entry.
    pub fn code(&self, symbol: &S) -> Result<&Code> {
        self.codes.get(symbol).ok_or_else(|| {
            HuffmanError::MissingCode {
                symbol: format!("{:?}", symbol),
            }
            .into()
        })
    }

    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    /// Iterate codes in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> + '_ {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts directly before the codes
        // it prefixes, so adjacent pairs suffice.
        let mut sorted: Vec<&Code> = self.codes.values().collect();
        sorted.sort();
        sorted.windows(2).all(|w| !w[0].is_prefix_of(w[1]))
    }
}

fn collect<S: Symbol>(node: &Node<S>, path: &mut Code, codes: &mut BTreeMap<S, Code>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(symbol.clone(), path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect(left, path, codes);
            path.pop();

            path.push(true);
            collect(right, path, codes);
            path.pop();
        }
    }
}

/// Number of meaningful bits produced by encoding an input with frequencies
/// `freqs` using `codes`: the sum of count × code length.
///
/// # Errors
/// `HuffmanError::MissingCode` if a symbol of `freqs` has no code.
pub fn expected_bit_len<S: Symbol>(freqs: &FrequencyTable<S>, codes: &CodeTable<S>) -> Result<u64> {
    freqs.iter().try_fold(0u64, |acc, (symbol, count)| {
        Ok(acc + count * codes.code(symbol)?.len() as u64)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{build_tree, TieBreak};

    fn codes_for(pairs: &[(char, u64)], tie_break: TieBreak) -> CodeTable<char> {
        let freqs = FrequencyTable::from_counts(pairs.iter().copied());
        CodeTable::from_tree(&build_tree(&freqs, tie_break).unwrap())
    }

    fn rendered(table: &CodeTable<char>) -> Vec<(char, String)> {
        table.iter().map(|(s, c)| (*s, c.to_string())).collect()
    }

    #[test]
    fn test_abracadabra_codes() {
        let freqs = FrequencyTable::from_symbols("abracadabra".chars());
        let table = CodeTable::from_tree(&build_tree(&freqs, TieBreak::Reference).unwrap());
        assert_eq!(
            rendered(&table),
            vec![
                ('a', "0".to_string()),
                ('b', "111".to_string()),
                ('c', "1100".to_string()),
                ('d', "1101".to_string()),
                ('r', "10".to_string()),
            ]
        );
        assert_eq!(expected_bit_len(&freqs, &table).unwrap(), 23);
    }

    #[test]
    fn test_abracadabra_codes_sequence() {
        let freqs = FrequencyTable::from_symbols("abracadabra".chars());
        let table = CodeTable::from_tree(&build_tree(&freqs, TieBreak::Sequence).unwrap());
        assert_eq!(
            rendered(&table),
            vec![
                ('a', "0".to_string()),
                ('b', "110".to_string()),
                ('c', "100".to_string()),
                ('d', "101".to_string()),
                ('r', "111".to_string()),
            ]
        );
        assert_eq!(expected_bit_len(&freqs, &table).unwrap(), 23);
    }

    #[test]
    fn test_tie_break_codes() {
        let table = codes_for(&[('a', 1), ('b', 1), ('c', 2)], TieBreak::Reference);
        assert_eq!(
            rendered(&table),
            vec![
                ('a', "00".to_string()),
                ('b', "01".to_string()),
                ('c', "1".to_string()),
            ]
        );

        let table = codes_for(&[('a', 1), ('b', 1), ('c', 2)], TieBreak::Sequence);
        assert_eq!(
            rendered(&table),
            vec![
                ('a', "10".to_string()),
                ('b', "11".to_string()),
                ('c', "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_tie_break_independent_of_identity() {
        let table = codes_for(&[('x', 1), ('y', 1), ('z', 2)], TieBreak::Reference);
        assert_eq!(
            rendered(&table),
            vec![
                ('x', "00".to_string()),
                ('y', "01".to_string()),
                ('z', "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = codes_for(&[('a', 4)], TieBreak::Reference);
        assert_eq!(rendered(&table), vec![('a', "0".to_string())]);
    }

    #[test]
    fn test_prefix_free() {
        let freqs = FrequencyTable::from_symbols("it was the best of times, it was the worst".chars());
        let table = CodeTable::from_tree(&build_tree(&freqs, TieBreak::Reference).unwrap());
        assert!(table.is_prefix_free());
        assert_eq!(table.len(), freqs.len());
    }

    #[test]
    fn test_prefix_detection() {
        let mut codes = BTreeMap::new();
        codes.insert('a', Code::from_bit_str("01").unwrap());
        codes.insert('b', Code::from_bit_str("011").unwrap());
        codes.insert('c', Code::from_bit_str("1").unwrap());
        assert!(!CodeTable { codes }.is_prefix_free());
    }

    #[test]
    fn test_missing_code() {
        let table = codes_for(&[('a', 1), ('b', 1)], TieBreak::Reference);
        assert!(matches!(
            table.code(&'z'),
            Err(crate::error::Error::Huffman(HuffmanError::MissingCode { .. }))
        ));

        let freqs = FrequencyTable::from_counts(vec![('a', 1), ('z', 3)]);
        assert!(expected_bit_len(&freqs, &table).is_err());
    }

    #[test]
    fn test_higher_frequency_not_longer() {
        let freqs = FrequencyTable::from_symbols("aaaaaaaabbbbccd".chars());
        let table = CodeTable::from_tree(&build_tree(&freqs, TieBreak::Reference).unwrap());
        let len = |c: char| table.get(&c).unwrap().len();
        assert!(len('a') <= len('b'));
        assert!(len('b') <= len('c'));
        assert!(len('c') <= len('d'));
    }

    #[test]
    fn test_code_from_bit_str() {
        assert_eq!(Code::from_bit_str("101").unwrap().bits(), &[true, false, true]);
        assert!(Code::from_bit_str("10x").is_none());
        assert!(Code::from_bit_str("").unwrap().is_empty());
    }
}
