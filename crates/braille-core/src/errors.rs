//! Error types for cell manipulation and pattern parsing.

use thiserror::Error;

/// Errors raised while mutating a [`crate::DotState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DotError {
    /// Dot index outside the cell.
    ///
    /// Only reachable through a broken key or button mapping. The cell size
    /// is fixed, so the toggle is refused instead of clamped.
    #[error("dot index {index} out of range (expected 0..6)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },
}

/// Errors raised while parsing a textual dot pattern such as `"101000"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern does not have exactly six characters.
    #[error("pattern must have 6 characters, got {len}")]
    WrongLength {
        /// Number of characters in the input.
        len: usize,
    },

    /// Pattern contains something other than `0` or `1`.
    #[error("invalid character {found:?} at position {position}")]
    InvalidChar {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },
}
