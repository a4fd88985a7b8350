//! Terminal input translation.
//!
//! Converts crossterm events into [`AppEvent`]s: keys go through
//! [`braille_app::map_key`], left clicks are hit-tested against the last
//! rendered [`HitMap`].

use braille_app::{AppEvent, KeyInput, map_key};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::ui::HitMap;

/// Convert a crossterm key event into a platform-neutral key.
pub fn key_input(key: &KeyEvent) -> KeyInput {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyInput::CtrlC,
        KeyCode::Char(_) if ctrl => KeyInput::Other,
        KeyCode::Char(c) => KeyInput::Char(c),
        KeyCode::Enter => KeyInput::Enter,
        KeyCode::Backspace => KeyInput::Backspace,
        KeyCode::Esc => KeyInput::Esc,
        _ => KeyInput::Other,
    }
}

/// Translate one terminal event, `None` if the composer ignores it.
///
/// Key releases are dropped (terminals with the kitty protocol report both
/// edges); repeats are kept, matching held-key behavior.
pub fn translate(event: &Event, hits: &HitMap) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key_input(key)),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left), column, row, ..
        }) => hits.hit(*column, *row),
        Event::Resize(..) => Some(AppEvent::Resize),
        _ => None,
    }
}
