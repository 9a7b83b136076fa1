//! The alphabet abstraction.
//!
//! A symbol needs a total order (tables are ordered by it), a string label
//! for the reference tie-break rule, and an escaped rendering that keeps the
//! frequency file line-oriented.

use std::fmt::Debug;

/// An atomic unit of the input alphabet.
pub trait Symbol: Ord + Clone + Debug {
    /// Label compared against internal-node labels when weights tie.
    fn tie_break_label(&self) -> String;

    /// Rendering used in the frequency file. Must never contain `'\n'`.
    fn escape(&self) -> String;

    /// Inverse of [`Symbol::escape`]. Returns `None` when `field` does not
    /// encode exactly one symbol.
    fn unescape(field: &str) -> Option<Self>;
}

const ESCAPED_NEWLINE: &str = "\\n";

impl Symbol for char {
    fn tie_break_label(&self) -> String {
        self.to_string()
    }

    fn escape(&self) -> String {
        if *self == '\n' {
            ESCAPED_NEWLINE.to_string()
        } else {
            self.to_string()
        }
    }

    fn unescape(field: &str) -> Option<Self> {
        if field == ESCAPED_NEWLINE {
            return Some('\n');
        }
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c != '\n' => Some(c),
            _ => None,
        }
    }
}

/// Bytes are rendered as Latin-1 characters.
impl Symbol for u8 {
    fn tie_break_label(&self) -> String {
        char::from(*self).to_string()
    }

    fn escape(&self) -> String {
        char::from(*self).escape()
    }

    fn unescape(field: &str) -> Option<Self> {
        char::unescape(field).and_then(|c| u8::try_from(c).ok())
    }
}
