//! Static pattern to letter table.
//!
//! Only the 26 lowercase Latin letters are mapped. The lookup table is built
//! at compile time and indexed directly by the 6-bit pattern value.

use std::fmt;

use crate::dots::Dots;

/// Patterns for `a` through `z`, in alphabetical order.
const ALPHABET: [Dots; 26] = [
    Dots::from_cells([1, 0, 0, 0, 0, 0]), // a
    Dots::from_cells([1, 0, 1, 0, 0, 0]), // b
    Dots::from_cells([1, 1, 0, 0, 0, 0]), // c
    Dots::from_cells([1, 1, 0, 1, 0, 0]), // d
    Dots::from_cells([1, 0, 0, 1, 0, 0]), // e
    Dots::from_cells([1, 1, 1, 0, 0, 0]), // f
    Dots::from_cells([1, 1, 1, 1, 0, 0]), // g
    Dots::from_cells([1, 0, 1, 1, 0, 0]), // h
    Dots::from_cells([0, 1, 1, 0, 0, 0]), // i
    Dots::from_cells([0, 1, 1, 1, 0, 0]), // j
    Dots::from_cells([1, 0, 0, 0, 1, 0]), // k
    Dots::from_cells([1, 0, 1, 0, 1, 0]), // l
    Dots::from_cells([1, 1, 0, 0, 1, 0]), // m
    Dots::from_cells([1, 1, 0, 1, 1, 0]), // n
    Dots::from_cells([1, 0, 0, 1, 1, 0]), // o
    Dots::from_cells([1, 1, 1, 0, 1, 0]), // p
    Dots::from_cells([1, 1, 1, 1, 1, 0]), // q
    Dots::from_cells([1, 0, 1, 1, 1, 0]), // r
    Dots::from_cells([0, 1, 1, 0, 1, 0]), // s
    Dots::from_cells([0, 1, 1, 1, 1, 0]), // t
    Dots::from_cells([1, 0, 0, 0, 1, 1]), // u
    Dots::from_cells([1, 0, 1, 0, 1, 1]), // v
    Dots::from_cells([0, 1, 1, 1, 0, 1]), // w
    Dots::from_cells([1, 1, 0, 0, 1, 1]), // x
    Dots::from_cells([1, 1, 0, 1, 1, 1]), // y
    Dots::from_cells([1, 0, 0, 1, 1, 1]), // z
];

const TABLE_SIZE: usize = 1 << crate::dots::CELL_DOTS;

static TABLE: [Option<Letter>; TABLE_SIZE] = build_table();

const fn build_table() -> [Option<Letter>; TABLE_SIZE] {
    let mut table = [None; TABLE_SIZE];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i].bits() as usize] = Some(Letter((b'a' + i as u8) as char));
        i += 1;
    }
    table
}

/// A lowercase Latin letter with a known cell pattern.
///
/// Only `a..=z` can be constructed, and every one of them is in the table,
/// so anything holding a `Letter` can be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(char);

impl Letter {
    /// Letter for `c`, case-insensitive. `None` outside `a..=z`.
    pub fn new(c: char) -> Option<Self> {
        let c = c.to_ascii_lowercase();
        c.is_ascii_lowercase().then_some(Self(c))
    }

    /// The lowercase character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Cell pattern that spells this letter.
    pub fn dots(self) -> Dots {
        let offset = (self.0 as u8).wrapping_sub(b'a') as usize;
        ALPHABET.get(offset).copied().unwrap_or_default()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of decoding a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preview {
    /// No dot raised.
    Empty,

    /// At least one dot raised, but the pattern is not a letter.
    Ambiguous,

    /// Pattern spells this letter.
    Letter(Letter),
}

impl Preview {
    /// Glyph shown for [`Preview::Ambiguous`].
    pub const AMBIGUOUS_GLYPH: char = '?';

    /// The decoded letter, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Empty | Self::Ambiguous => None,
        }
    }

    /// Glyph to display, `None` when there is nothing to show.
    pub fn glyph(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Ambiguous => Some(Self::AMBIGUOUS_GLYPH),
            Self::Letter(letter) => Some(letter.as_char()),
        }
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.glyph() {
            Some(glyph) => write!(f, "{glyph}"),
            None => Ok(()),
        }
    }
}

/// Decode a cell pattern.
///
/// Total over every input: empty for no raised dot, the letter for one of
/// the 26 known patterns, ambiguous otherwise.
pub fn decode(dots: Dots) -> Preview {
    if dots.is_empty() {
        return Preview::Empty;
    }

    match TABLE.get(usize::from(dots.bits())).copied().flatten() {
        Some(letter) => Preview::Letter(letter),
        None => Preview::Ambiguous,
    }
}

/// Pattern for a letter, case-insensitive. `None` outside `a..=z`.
pub fn encode(c: char) -> Option<Dots> {
    Letter::new(c).map(Letter::dots)
}

/// Every mapped letter with its pattern, `a` first.
pub fn letters() -> impl Iterator<Item = (Letter, Dots)> {
    ALPHABET.into_iter().zip(b'a'..=b'z').map(|(dots, c)| (Letter(c as char), dots))
}
