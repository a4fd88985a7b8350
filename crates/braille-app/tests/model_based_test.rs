//! Model-based property tests.
//!
//! Random event sequences are applied to the real [`App`] and to a reference
//! model built from the textual pattern table. After every step both must
//! agree on the cell, the preview, the line and the requested sounds.

use std::collections::HashMap;

use braille_app::{App, AppAction, AppEvent};
use proptest::prelude::*;

const TABLE: [(&str, char); 26] = [
    ("100000", 'a'),
    ("101000", 'b'),
    ("110000", 'c'),
    ("110100", 'd'),
    ("100100", 'e'),
    ("111000", 'f'),
    ("111100", 'g'),
    ("101100", 'h'),
    ("011000", 'i'),
    ("011100", 'j'),
    ("100010", 'k'),
    ("101010", 'l'),
    ("110010", 'm'),
    ("110110", 'n'),
    ("100110", 'o'),
    ("111010", 'p'),
    ("111110", 'q'),
    ("101110", 'r'),
    ("011010", 's'),
    ("011110", 't'),
    ("100011", 'u'),
    ("101011", 'v'),
    ("011101", 'w'),
    ("110011", 'x'),
    ("110111", 'y'),
    ("100111", 'z'),
];

/// Reference model: six flags, a string, and a lookup by pattern text.
struct ModelWorld {
    dots: [u8; 6],
    text: String,
    table: HashMap<&'static str, char>,
}

impl ModelWorld {
    fn new() -> Self {
        Self { dots: [0; 6], text: String::new(), table: TABLE.into_iter().collect() }
    }

    fn key(&self) -> String {
        self.dots.iter().map(u8::to_string).collect()
    }

    fn preview(&self) -> String {
        match self.table.get(self.key().as_str()) {
            Some(c) => c.to_string(),
            None if self.dots.contains(&1) => "?".to_string(),
            None => String::new(),
        }
    }

    /// Apply an event, returning the letter whose clip should play.
    fn apply(&mut self, event: AppEvent) -> Option<char> {
        match event {
            AppEvent::ToggleDot { index } => {
                if let Some(dot) = self.dots.get_mut(index) {
                    *dot ^= 1;
                }
                None
            },
            AppEvent::Commit => {
                let letter = self.table.get(self.key().as_str()).copied()?;
                self.text.push(letter);
                self.dots = [0; 6];
                Some(letter)
            },
            AppEvent::Backspace => {
                self.text.pop();
                None
            },
            AppEvent::Space => {
                self.text.push(' ');
                None
            },
            AppEvent::Resize | AppEvent::Quit => None,
        }
    }
}

fn event_strategy() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        6 => (0usize..6).prop_map(|index| AppEvent::ToggleDot { index }),
        1 => (6usize..10).prop_map(|index| AppEvent::ToggleDot { index }),
        3 => Just(AppEvent::Commit),
        1 => Just(AppEvent::Backspace),
        1 => Just(AppEvent::Space),
        1 => Just(AppEvent::Resize),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn app_matches_model(events in prop::collection::vec(event_strategy(), 0..80)) {
        let mut app = App::new();
        let mut model = ModelWorld::new();

        for event in events {
            let expected_sound = model.apply(event);
            let sound = match app.handle(event) {
                Ok(actions) => actions.iter().find_map(|action| match action {
                    AppAction::PlaySound { letter } => Some(letter.as_char()),
                    AppAction::Render | AppAction::Quit => None,
                }),
                Err(_) => {
                    prop_assert!(
                        matches!(event, AppEvent::ToggleDot { index } if index >= 6),
                        "unexpected error for {:?}",
                        event
                    );
                    None
                },
            };

            prop_assert_eq!(sound, expected_sound);
            prop_assert_eq!(app.dots().pattern().to_string(), model.key());
            prop_assert_eq!(app.preview().to_string(), model.preview());
            prop_assert_eq!(app.line().as_str(), model.text.as_str());
            prop_assert_eq!(app.can_commit(), model.table.contains_key(model.key().as_str()));
        }
    }
}
