//! Arbitrary input streams keep the composer consistent: the line only holds
//! letters and spaces, and a commit always leaves the cell empty.

#![no_main]

use braille_app::{App, AppAction, AppEvent};
use libfuzzer_sys::fuzz_target;

fn event(byte: u8) -> AppEvent {
    match byte % 12 {
        0..=7 => AppEvent::ToggleDot { index: usize::from(byte % 8) },
        8 => AppEvent::Commit,
        9 => AppEvent::Backspace,
        10 => AppEvent::Space,
        _ => AppEvent::Resize,
    }
}

fuzz_target!(|data: &[u8]| {
    let mut app = App::new();

    for &byte in data {
        let Ok(actions) = app.handle(event(byte)) else {
            continue;
        };

        if actions.iter().any(|a| matches!(a, AppAction::PlaySound { .. })) {
            assert!(app.dots().is_empty());
        }
        assert!(app.line().as_str().chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
    }
});
