//! Terminal UI for the Braille composer
//!
//! A thin shell over [`braille_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`braille_app::Runtime`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod audio;
pub mod config;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use audio::{AudioPlayer, Playback, SoundBank};
pub use braille_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use config::Args;
pub use terminal::{TerminalDriver, TerminalError};
pub use ui::HitMap;
