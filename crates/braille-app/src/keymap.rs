//! Key mapping for keyboard-driven front-ends.
//!
//! Front-ends translate their native key events into [`KeyInput`] and call
//! [`map_key`]. The mapping is fixed; it never depends on the current state,
//! so a front-end registers one handler for the whole session.

use crate::AppEvent;

/// Platform-neutral key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter / Return.
    Enter,
    /// Backspace.
    Backspace,
    /// Escape.
    Esc,
    /// Ctrl+C.
    CtrlC,
    /// Anything the composer does not care about.
    Other,
}

/// Map a key press to an event, `None` for keys the composer ignores.
///
/// | Key | Event |
/// |-----|-------|
/// | `1` to `6` | toggle dot index `0` to `5` |
/// | Enter | commit |
/// | Backspace | backspace |
/// | Space | space |
/// | Esc, Ctrl+C | quit |
pub fn map_key(key: KeyInput) -> Option<AppEvent> {
    match key {
        KeyInput::Char(' ') => Some(AppEvent::Space),
        KeyInput::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=6) => Some(AppEvent::ToggleDot { index: digit as usize - 1 }),
            _ => None,
        },
        KeyInput::Enter => Some(AppEvent::Commit),
        KeyInput::Backspace => Some(AppEvent::Backspace),
        KeyInput::Esc | KeyInput::CtrlC => Some(AppEvent::Quit),
        KeyInput::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_toggle_zero_based_index() {
        for (c, index) in ('1'..='6').zip(0..) {
            assert_eq!(map_key(KeyInput::Char(c)), Some(AppEvent::ToggleDot { index }));
        }
    }

    #[test]
    fn other_digits_are_ignored() {
        assert_eq!(map_key(KeyInput::Char('0')), None);
        assert_eq!(map_key(KeyInput::Char('7')), None);
        assert_eq!(map_key(KeyInput::Char('9')), None);
    }

    #[test]
    fn editing_keys() {
        assert_eq!(map_key(KeyInput::Enter), Some(AppEvent::Commit));
        assert_eq!(map_key(KeyInput::Backspace), Some(AppEvent::Backspace));
        assert_eq!(map_key(KeyInput::Char(' ')), Some(AppEvent::Space));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(KeyInput::Esc), Some(AppEvent::Quit));
        assert_eq!(map_key(KeyInput::CtrlC), Some(AppEvent::Quit));
    }

    #[test]
    fn letters_are_ignored() {
        assert_eq!(map_key(KeyInput::Char('a')), None);
        assert_eq!(map_key(KeyInput::Char('q')), None);
        assert_eq!(map_key(KeyInput::Other), None);
    }
}
