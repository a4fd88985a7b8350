//! App events
//!
//! Input delivered to the App state machine, independent of where it came
//! from (keyboard, pointer, or a test script).

/// Events the App state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Flip one dot of the cell.
    ToggleDot {
        /// Grid index, `0..6`.
        index: usize,
    },

    /// Commit the previewed letter and clear the cell.
    Commit,

    /// Remove the last committed character.
    Backspace,

    /// Append a space to the line.
    Space,

    /// Terminal or window size changed.
    Resize,

    /// Leave the application.
    Quit,
}
