//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::future::Future;

use braille_core::Letter;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`crate::Runtime`] handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal and in tests.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for input and return the events it produced.
    ///
    /// Returns `Ok(None)` once the input source is closed. An empty vector
    /// means input arrived that maps to no event.
    fn poll_events(
        &mut self,
    ) -> impl Future<Output = Result<Option<Vec<AppEvent>>, Self::Error>> + Send;

    /// Start playback of the clip for `letter`.
    ///
    /// Must return without waiting for playback. Failures are the driver's
    /// to report; they never stop the runtime.
    fn play_sound(&mut self, letter: Letter);

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release platform resources.
    fn stop(&mut self);
}
