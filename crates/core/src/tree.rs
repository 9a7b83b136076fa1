//! Huffman tree construction.
//!
//! The builder keeps a min-heap of pending nodes keyed by
//! `(weight, tie-break label, sequence)` and repeatedly merges the two
//! smallest. The first node popped becomes the left child (edge bit `0`),
//! the second the right child (edge bit `1`).
//!
//! # Tie-breaking
//!
//! With [`TieBreak::Reference`], equal weights are ordered by the node's
//! representative label: the symbol's label for a leaf, the decimal
//! rendering of the weight for an internal node, compared as strings. Nodes
//! whose weight and label both tie are taken in creation order (leaves in
//! frequency-table order, then internal nodes as they are merged). This
//! reproduces the code assignment of the historical encoder exactly.
//!
//! With [`TieBreak::Sequence`], equal weights are ordered by creation order
//! alone.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::symbol::Symbol;

/// Rule used to order nodes of equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Compare representative labels as strings, then creation order.
    #[default]
    Reference,
    /// Compare creation order only.
    Sequence,
}

/// A node of a Huffman tree. Children are owned exclusively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        /// Reached through edge bit `0`
        left: Box<Node<S>>,
        /// Reached through edge bit `1`
        right: Box<Node<S>>,
        weight: u64,
    },
}

impl<S: Symbol> Node<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Merge two nodes; `left` was selected first.
    pub fn merge(left: Node<S>, right: Node<S>) -> Self {
        let weight = left.weight() + right.weight();
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Representative label used by [`TieBreak::Reference`].
    pub fn label(&self) -> String {
        match self {
            Node::Leaf { symbol, .. } => symbol.tie_break_label(),
            Node::Internal { weight, .. } => weight.to_string(),
        }
    }
}

/// A complete Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Total weight, equal to the length of the encoded input.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    pub fn leaf_count(&self) -> usize {
        fn count<S>(node: &Node<S>) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Internal { left, right, .. } => count(left) + count(right),
            }
        }
        count(&self.root)
    }

    /// Depth of the deepest leaf. A lone leaf has depth 0.
    pub fn height(&self) -> usize {
        fn height<S>(node: &Node<S>) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Internal { left, right, .. } => 1 + height(left).max(height(right)),
            }
        }
        height(&self.root)
    }

    /// Sum over leaves of weight × depth.
    pub fn weighted_path_length(&self) -> u64 {
        fn walk<S>(node: &Node<S>, depth: u64) -> u64 {
            match node {
                Node::Leaf { weight, .. } => weight * depth,
                Node::Internal { left, right, .. } => {
                    walk(left, depth + 1) + walk(right, depth + 1)
                }
            }
        }
        walk(&self.root, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct MergeKey {
    weight: u64,
    label: Option<String>,
    seq: usize,
}

/// A heap entry. Ordered by key only.
struct Pending<S> {
    key: MergeKey,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Pending<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<S: Symbol> Pending<S> {
    fn new(node: Node<S>, seq: usize, tie_break: TieBreak) -> Self {
        let label = match tie_break {
            TieBreak::Reference => Some(node.label()),
            TieBreak::Sequence => None,
        };
        Self {
            key: MergeKey {
                weight: node.weight(),
                label,
                seq,
            },
            node,
        }
    }
}

/// Build the Huffman tree for `freqs`.
///
/// A single-symbol table yields a tree made of one leaf.
///
/// # Errors
/// `HuffmanError::EmptyInput` if `freqs` is empty.
pub fn build_tree<S: Symbol>(
    freqs: &FrequencyTable<S>,
    tie_break: TieBreak,
) -> Result<HuffmanTree<S>> {
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }

    let mut heap = BinaryHeap::with_capacity(freqs.len());
    let mut seq = 0usize;
    for (symbol, count) in freqs.iter() {
        heap.push(Reverse(Pending::new(
            Node::leaf(symbol.clone(), count),
            seq,
            tie_break,
        )));
        seq += 1;
    }

    loop {
        let Reverse(first) = heap.pop().ok_or(HuffmanError::EmptyInput)?;
        let Some(Reverse(second)) = heap.pop() else {
            let tree = HuffmanTree { root: first.node };
            debug!(
                "built huffman tree: {} leaves, weight {}, height {} ({:?} tie-break)",
                tree.leaf_count(),
                tree.weight(),
                tree.height(),
                tie_break
            );
            trace!("huffman tree: {:?}", tree.root);
            return Ok(tree);
        };

        trace!(
            "merge {:?} + {:?}",
            (first.key.weight, &first.key.label),
            (second.key.weight, &second.key.label)
        );
        let merged = Node::merge(first.node, second.node);
        heap.push(Reverse(Pending::new(merged, seq, tie_break)));
        seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(char, u64)]) -> FrequencyTable<char> {
        FrequencyTable::from_counts(pairs.iter().copied())
    }

    fn leaf_symbol(node: &Node<char>) -> char {
        match node {
            Node::Leaf { symbol, .. } => *symbol,
            Node::Internal { .. } => panic!("expected a leaf"),
        }
    }

    fn children(node: &Node<char>) -> (&Node<char>, &Node<char>) {
        match node {
            Node::Internal { left, right, .. } => (left, right),
            Node::Leaf { .. } => panic!("expected an internal node"),
        }
    }

    #[test]
    fn test_empty_table_fails() {
        let result = build_tree(&table(&[]), TieBreak::Reference);
        assert!(matches!(
            result,
            Err(crate::error::Error::Huffman(HuffmanError::EmptyInput))
        ));
    }

    #[test]
    fn test_single_symbol_is_lone_leaf() {
        let tree = build_tree(&table(&[('a', 4)]), TieBreak::Reference).unwrap();
        assert!(tree.root().is_leaf());
        assert_eq!(tree.weight(), 4);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_reference_tie_break_prefers_internal_label() {
        // a,b merge into "2"; "2" < "c" so the internal node goes left
        let tree = build_tree(&table(&[('a', 1), ('b', 1), ('c', 2)]), TieBreak::Reference).unwrap();
        let (left, right) = children(tree.root());
        assert_eq!(leaf_symbol(right), 'c');
        let (ll, lr) = children(left);
        assert_eq!((leaf_symbol(ll), leaf_symbol(lr)), ('a', 'b'));
    }

    #[test]
    fn test_sequence_tie_break_prefers_older_node() {
        let tree = build_tree(&table(&[('a', 1), ('b', 1), ('c', 2)]), TieBreak::Sequence).unwrap();
        let (left, right) = children(tree.root());
        assert_eq!(leaf_symbol(left), 'c');
        assert!(!right.is_leaf());
    }

    #[test]
    fn test_reference_leaf_label_below_digit() {
        // '1' sorts before the internal label "2"
        let tree = build_tree(&table(&[('x', 1), ('y', 1), ('1', 2)]), TieBreak::Reference).unwrap();
        let (left, _) = children(tree.root());
        assert_eq!(leaf_symbol(left), '1');
    }

    #[test]
    fn test_equal_label_falls_back_to_creation_order() {
        // leaf '2' and the internal node of weight 2 share the label "2";
        // the leaf was created first
        let tree = build_tree(&table(&[('a', 1), ('b', 1), ('2', 2)]), TieBreak::Reference).unwrap();
        let (left, right) = children(tree.root());
        assert_eq!(leaf_symbol(left), '2');
        assert!(!right.is_leaf());
    }

    #[test]
    fn test_abracadabra_shape() {
        let freqs = FrequencyTable::from_symbols("abracadabra".chars());
        let tree = build_tree(&freqs, TieBreak::Reference).unwrap();

        assert_eq!(tree.weight(), 11);
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.weighted_path_length(), 23);

        let (a, rest) = children(tree.root());
        assert_eq!(leaf_symbol(a), 'a');
        let (r, rest) = children(rest);
        assert_eq!(leaf_symbol(r), 'r');
        let (cd, b) = children(rest);
        assert_eq!(leaf_symbol(b), 'b');
        let (c, d) = children(cd);
        assert_eq!((leaf_symbol(c), leaf_symbol(d)), ('c', 'd'));
    }

    #[test]
    fn test_internal_weight_is_sum_of_children() {
        fn check(node: &Node<char>) {
            if let Node::Internal { left, right, weight } = node {
                assert_eq!(*weight, left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        let freqs = FrequencyTable::from_symbols("mississippi river banks".chars());
        let tree = build_tree(&freqs, TieBreak::Reference).unwrap();
        check(tree.root());
        assert_eq!(tree.weight(), freqs.total());
    }
}
