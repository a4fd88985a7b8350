//! Terminal driver.
//!
//! Owns the raw-mode terminal, the crossterm event stream and the audio
//! player. The terminal is restored on [`Driver::stop`], on drop, and from
//! the panic hook.

use std::io::{self, Stdout, Write};

use braille_app::{App, AppEvent, Driver};
use braille_core::Letter;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tracing::debug;

use crate::{audio::AudioPlayer, input, ui};

/// Errors from the terminal front-end.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// Terminal or file I/O failed.
    #[error("terminal I/O: {0}")]
    Io(#[from] io::Error),

    /// Log subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// [`Driver`] over a crossterm terminal.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    hits: ui::HitMap,
    audio: AudioPlayer,
    active: bool,
}

impl TerminalDriver {
    /// Enter raw mode, the alternate screen and mouse capture.
    pub fn new(audio: AudioPlayer) -> Result<Self, TerminalError> {
        install_panic_hook();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            leave_screen(&mut stdout);
            return Err(error.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(error) => {
                leave_screen(&mut io::stdout());
                return Err(error.into());
            },
        };
        debug!(audio_dir = %audio.bank().dir().display(), "terminal ready");

        Ok(Self {
            terminal,
            events: EventStream::new(),
            hits: ui::HitMap::default(),
            audio,
            active: true,
        })
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;

        leave_screen(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    fn poll_events(
        &mut self,
    ) -> impl Future<Output = Result<Option<Vec<AppEvent>>, Self::Error>> + Send {
        async move {
            match self.events.next().await {
                None => Ok(None),
                Some(Err(error)) => Err(error.into()),
                Some(Ok(event)) => {
                    Ok(Some(input::translate(&event, &self.hits).into_iter().collect()))
                },
            }
        }
    }

    fn play_sound(&mut self, letter: Letter) {
        self.audio.play(letter);
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut hits = self.hits;
        self.terminal.draw(|frame| hits = ui::draw(frame, app))?;
        self.hits = hits;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Restore the terminal before the default panic report is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        leave_screen(&mut io::stdout());
        previous(info);
    }));
}

/// Undo raw mode, the alternate screen and mouse capture. Best effort: the
/// caller is leaving either way.
fn leave_screen(writer: &mut impl Write) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, DisableMouseCapture);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn leave_screen_undoes_screen_and_mouse_capture() {
        let mut out = Vec::new();
        leave_screen(&mut out);

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen left: {written:?}");
        assert!(written.contains("\x1b[?1000l"), "mouse capture disabled: {written:?}");
    }
}
