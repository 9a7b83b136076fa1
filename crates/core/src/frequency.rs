//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] lists every distinct symbol of an input with its
//! occurrence count, in a total order that does not depend on hashing:
//! count ascending, then symbol ascending. Tree construction, the frequency
//! file and the tests all rely on this order.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;

/// Mapping from symbol to a positive occurrence count.
///
/// # Invariants
/// - every count is > 0
/// - each symbol appears exactly once
/// - `entries` is sorted by (count, symbol)
/// - `index` holds exactly the pairs of `entries`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    /// Symbol lookup
    index: BTreeMap<S, u64>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count every symbol of `symbols`.
    ///
    /// An empty input yields an empty table.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut counts: BTreeMap<S, u64> = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        let table = Self::from_counts(counts);

        debug!(
            "analyzed {} symbols, alphabet size {}",
            table.total(),
            table.len()
        );
        trace!("frequencies: {:?}", table.entries);
        table
    }

    /// Build a table from explicit counts. Zero counts are dropped.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let merged = counts
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .fold(BTreeMap::new(), |mut acc: BTreeMap<S, u64>, (symbol, count)| {
                *acc.entry(symbol).or_insert(0) += count;
                acc
            });

        let mut entries: Vec<(S, u64)> = merged
            .iter()
            .map(|(symbol, count)| (symbol.clone(), *count))
            .collect();
        // BTreeMap already sorted by symbol, so a stable sort by count
        // yields (count, symbol) order
        entries.sort_by_key(|(_, count)| *count);
        Self {
            entries,
            index: merged,
        }
    }

    /// Occurrence count of `symbol`, if present.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).copied()
    }

    /// Whether `symbol` has an entry.
    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Iterate entries in (count, symbol) ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, c)| (s, *c))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the analyzed input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Check that every symbol of `symbols` has an entry.
    ///
    /// # Errors
    /// `HuffmanError::IncompleteFrequencyTable` naming the first uncovered
    /// symbol.
    pub fn ensure_covers<'a, I>(&self, symbols: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        for symbol in symbols {
            if !self.contains(symbol) {
                return Err(HuffmanError::IncompleteFrequencyTable {
                    symbol: format!("{:?}", symbol),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
