//! Composer state machine.
//!
//! # Architecture: Action-Based State Machine
//!
//! - [`App::handle`] accepts one [`AppEvent`] and mutates state in place
//! - It returns the [`AppAction`]s the runtime must execute (render, play a
//!   clip, quit)
//! - No I/O happens here, so every transition is testable directly
//!
//! # Phases
//!
//! ```text
//!            toggle (unmapped)          toggle (mapped)
//! ┌──────┐ ───────────────────> ┌───────────┐ ──────────> ┌───────┐
//! │ Idle │                      │ Composing │             │ Ready │
//! └──────┘ <─────────────────── └───────────┘ <────────── └───────┘
//!    ^        toggle (cleared)                  toggle        │
//!    └────────────────────────── commit ──────────────────────┘
//! ```
//!
//! A commit from `Idle` or `Composing` is ignored. Backspace and space only
//! touch the line and never change the phase.

use braille_core::{DotState, LineBuffer, Preview};
use tracing::debug;

use crate::{AppAction, AppError, AppEvent};

/// Phase derived from the current cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No dot raised.
    Idle,
    /// Dots raised, pattern is not a letter.
    Composing,
    /// Dots raised, pattern spells a letter.
    Ready,
}

impl From<Preview> for Phase {
    fn from(preview: Preview) -> Self {
        match preview {
            Preview::Empty => Self::Idle,
            Preview::Ambiguous => Self::Composing,
            Preview::Letter(_) => Self::Ready,
        }
    }
}

/// Composer state.
///
/// Owned exclusively by the runtime; renderers receive `&App`.
#[derive(Debug, Clone, Default)]
pub struct App {
    dots: DotState,
    line: LineBuffer,
    should_quit: bool,
}

impl App {
    /// Empty cell, empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// - `AppError::Dot` for a toggle outside the cell. State is unchanged.
    pub fn handle(&mut self, event: AppEvent) -> Result<Vec<AppAction>, AppError> {
        match event {
            AppEvent::ToggleDot { index } => {
                self.dots.toggle(index)?;
                debug!(index, pattern = %self.dots.pattern(), phase = ?self.phase(), "dot toggled");
                Ok(vec![AppAction::Render])
            },
            AppEvent::Commit => Ok(self.commit()),
            AppEvent::Backspace => match self.line.backspace() {
                Some(removed) => {
                    debug!(?removed, "backspace");
                    Ok(vec![AppAction::Render])
                },
                None => Ok(Vec::new()),
            },
            AppEvent::Space => {
                self.line.append_space();
                Ok(vec![AppAction::Render])
            },
            AppEvent::Resize => Ok(vec![AppAction::Render]),
            AppEvent::Quit => {
                self.should_quit = true;
                Ok(vec![AppAction::Quit])
            },
        }
    }

    fn commit(&mut self) -> Vec<AppAction> {
        let Some(letter) = self.preview().letter() else {
            debug!(pattern = %self.dots.pattern(), "commit ignored, no letter");
            return Vec::new();
        };

        self.line.commit(letter);
        self.dots.reset();
        debug!(%letter, line_len = self.line.len(), "letter committed");

        vec![AppAction::PlaySound { letter }, AppAction::Render]
    }

    /// Current cell.
    pub fn dots(&self) -> &DotState {
        &self.dots
    }

    /// Decoded preview of the current cell.
    pub fn preview(&self) -> Preview {
        self.dots.preview()
    }

    /// Phase of the current cell.
    pub fn phase(&self) -> Phase {
        Phase::from(self.preview())
    }

    /// Committed line.
    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    /// Whether a commit would append a letter.
    pub fn can_commit(&self) -> bool {
        self.phase() == Phase::Ready
    }

    /// Quit requested.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
