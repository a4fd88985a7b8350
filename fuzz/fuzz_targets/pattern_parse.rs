//! Pattern parsing never panics, and every accepted pattern decodes and
//! prints back to the same text.

#![no_main]

use braille_core::{Dots, Preview, decode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(dots) = text.parse::<Dots>() {
        assert_eq!(dots.to_string(), text);

        match decode(dots) {
            Preview::Empty => assert!(dots.is_empty()),
            Preview::Ambiguous => assert!(!dots.is_empty()),
            Preview::Letter(letter) => assert_eq!(letter.dots(), dots),
        }
    }
});
