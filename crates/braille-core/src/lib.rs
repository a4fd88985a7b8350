//! Six-dot Braille cell model.
//!
//! A cell is six binary dots arranged in a 2x3 grid. Some of the 64 possible
//! patterns spell a lowercase Latin letter; the rest are either empty or
//! unrecognized. This crate holds the pure pieces of the composer: the dot
//! state, the static letter table, and the committed output line. There is
//! no I/O here.
//!
//! # Components
//!
//! - [`Dots`]: bit set of raised dots, one bit per grid index
//! - [`DotState`]: the mutable cell the user is composing
//! - [`decode`]: pattern to [`Preview`] lookup, total over all patterns
//! - [`LineBuffer`]: committed letters and spaces

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod decoder;
pub mod dots;
pub mod errors;
pub mod line;

pub use decoder::{Letter, Preview, decode, encode, letters};
pub use dots::{CELL_DOTS, DotState, Dots};
pub use errors::{DotError, PatternError};
pub use line::LineBuffer;
