//! Dot flags and the mutable cell state.
//!
//! Dots are addressed by grid index, row-major over a 2-column, 3-row grid:
//!
//! ```text
//! ┌───┬───┐
//! │ 0 │ 1 │   Braille dot 1 │ dot 4
//! ├───┼───┤
//! │ 2 │ 3 │   Braille dot 2 │ dot 5
//! ├───┼───┤
//! │ 4 │ 5 │   Braille dot 3 │ dot 6
//! └───┴───┘
//! ```
//!
//! The textual pattern form lists grid indices in order, so `"101000"` is
//! index 0 and index 2 raised (Braille dots 1 and 2, the letter `b`).

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    decoder::{Preview, decode},
    errors::{DotError, PatternError},
};

/// Number of dots in a cell.
pub const CELL_DOTS: usize = 6;

bitflags! {
    /// Raised dots of a single Braille cell.
    ///
    /// Bit `i` is grid index `i`. Flags are named after the standard Braille
    /// dot numbering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Dots: u8 {
        /// Grid index 0, top left.
        const DOT_1 = 1 << 0;
        /// Grid index 1, top right.
        const DOT_4 = 1 << 1;
        /// Grid index 2, middle left.
        const DOT_2 = 1 << 2;
        /// Grid index 3, middle right.
        const DOT_5 = 1 << 3;
        /// Grid index 4, bottom left.
        const DOT_3 = 1 << 4;
        /// Grid index 5, bottom right.
        const DOT_6 = 1 << 5;
    }
}

impl Dots {
    /// Flag for a single grid index, or `None` outside the cell.
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_DOTS { Some(Self::from_bits_retain(1 << index)) } else { None }
    }

    /// Build a pattern from one `0`/`1` entry per grid index.
    ///
    /// Any non-zero entry counts as raised.
    pub const fn from_cells(cells: [u8; CELL_DOTS]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < CELL_DOTS {
            if cells[i] != 0 {
                bits |= 1 << i;
            }
            i += 1;
        }
        Self::from_bits_retain(bits)
    }

    /// Whether the dot at `index` is raised. Out-of-range indices are never
    /// raised.
    pub fn has_index(self, index: usize) -> bool {
        Self::from_index(index).is_some_and(|dot| self.contains(dot))
    }

    /// One `0`/`1` entry per grid index.
    pub fn to_cells(self) -> [u8; CELL_DOTS] {
        let mut cells = [0; CELL_DOTS];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = u8::from(self.has_index(index));
        }
        cells
    }
}

impl Default for Dots {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Dots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..CELL_DOTS {
            f.write_str(if self.has_index(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Dots {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != CELL_DOTS {
            return Err(PatternError::WrongLength { len });
        }

        let mut dots = Self::empty();
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => {},
                '1' => dots |= Self::from_bits_retain(1 << position),
                _ => return Err(PatternError::InvalidChar { position, found }),
            }
        }
        Ok(dots)
    }
}

/// The cell being composed.
///
/// Starts with every dot lowered. Mutated one dot at a time by
/// [`DotState::toggle`] and cleared by [`DotState::reset`] after a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotState {
    dots: Dots,
}

impl DotState {
    /// All dots lowered.
    pub const fn new() -> Self {
        Self { dots: Dots::empty() }
    }

    /// Flip the dot at `index`.
    ///
    /// # Errors
    ///
    /// - `DotError::OutOfRange` if `index >= CELL_DOTS`. The state is left
    ///   unchanged.
    pub fn toggle(&mut self, index: usize) -> Result<(), DotError> {
        let dot = Dots::from_index(index).ok_or(DotError::OutOfRange { index })?;
        self.dots.toggle(dot);
        Ok(())
    }

    /// Lower every dot.
    pub fn reset(&mut self) {
        self.dots = Dots::empty();
    }

    /// Whether the dot at `index` is raised.
    pub fn is_on(&self, index: usize) -> bool {
        self.dots.has_index(index)
    }

    /// Current pattern.
    pub fn pattern(&self) -> Dots {
        self.dots
    }

    /// No dot raised.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Decoded preview of the current pattern.
    pub fn preview(&self) -> Preview {
        decode(self.dots)
    }
}

impl From<Dots> for DotState {
    /// Bits outside the cell are dropped.
    fn from(dots: Dots) -> Self {
        Self { dots: dots & Dots::all() }
    }
}
