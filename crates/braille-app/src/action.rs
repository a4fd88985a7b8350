//! App actions
//!
//! Actions produced by the App state machine for the runtime to execute.

use braille_core::Letter;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Play the clip for a committed letter.
    ///
    /// Fire-and-forget: the runtime does not wait for playback.
    PlaySound {
        /// The letter just committed.
        letter: Letter,
    },
}
