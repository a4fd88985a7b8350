//! Application layer for the Braille composer
//!
//! Pure state machine and generic runtime for input dispatch, so the same
//! code drives the terminal front-end and scripted tests.
//!
//! # Components
//!
//! - [`App`]: Composer state (cell, committed line, quit flag)
//! - [`AppEvent`]: Input the state machine reacts to
//! - [`AppAction`]: Side effects the state machine asks for
//! - [`keymap`]: Platform-neutral key to event mapping
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

mod action;
mod app;
mod driver;
mod error;
mod event;
pub mod keymap;
mod runtime;

pub use action::AppAction;
pub use app::{App, Phase};
pub use braille_core::{DotState, Dots, Letter, LineBuffer, Preview};
pub use driver::Driver;
pub use error::AppError;
pub use event::AppEvent;
pub use keymap::{KeyInput, map_key};
pub use runtime::Runtime;
