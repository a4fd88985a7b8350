//! Property tests for the cell model.

use braille_core::{DotState, Dots, LineBuffer, Preview, decode, letters};
use proptest::prelude::*;

fn any_state() -> impl Strategy<Value = DotState> {
    (0u8..64).prop_map(|bits| DotState::from(Dots::from_bits_retain(bits)))
}

proptest! {
    #[test]
    fn toggle_is_an_involution(mut state in any_state(), index in 0usize..6) {
        let before = state;
        state.toggle(index).unwrap();
        prop_assert_ne!(state, before);
        state.toggle(index).unwrap();
        prop_assert_eq!(state, before);
    }

    #[test]
    fn toggle_touches_only_its_index(mut state in any_state(), index in 0usize..6) {
        let before = state;
        state.toggle(index).unwrap();
        for other in (0..6).filter(|&i| i != index) {
            prop_assert_eq!(state.is_on(other), before.is_on(other));
        }
        prop_assert_ne!(state.is_on(index), before.is_on(index));
    }

    #[test]
    fn out_of_range_toggle_is_refused(mut state in any_state(), index in 6usize..) {
        let before = state;
        prop_assert!(state.toggle(index).is_err());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn reset_after_commit_is_all_lowered(mut state in any_state()) {
        let mut line = LineBuffer::new();
        if let Some(letter) = state.preview().letter() {
            line.commit(letter);
        }
        state.reset();
        prop_assert!(state.is_empty());
        prop_assert_eq!(state.preview(), Preview::Empty);
    }

    #[test]
    fn decode_agrees_with_letter_list(bits in 0u8..64) {
        let dots = Dots::from_bits_retain(bits);
        let listed = letters().find(|(_, d)| *d == dots).map(|(letter, _)| letter);

        let expected = match listed {
            Some(letter) => Preview::Letter(letter),
            None if dots.is_empty() => Preview::Empty,
            None => Preview::Ambiguous,
        };
        prop_assert_eq!(decode(dots), expected);
    }

    #[test]
    fn pattern_text_parses_back(bits in 0u8..64) {
        let dots = Dots::from_bits_retain(bits);
        prop_assert_eq!(dots.to_string().parse::<Dots>(), Ok(dots));
    }
}
