//! Committed output line.

use std::fmt;

use crate::decoder::Letter;

/// Letters and spaces committed so far.
///
/// Unbounded; grows by one character per commit or space and shrinks by
/// one per backspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
}

impl LineBuffer {
    /// Empty line.
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Append a decoded letter.
    pub fn commit(&mut self, letter: Letter) {
        self.text.push(letter.as_char());
    }

    /// Remove and return the last character. No-op on an empty line.
    pub fn backspace(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Append a single space.
    pub fn append_space(&mut self) {
        self.text.push(' ');
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Committed text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Nothing committed.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
