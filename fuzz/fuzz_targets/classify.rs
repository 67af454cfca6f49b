#![no_main]

extern crate libfuzzer_sys;
extern crate poker_showdown;

use libfuzzer_sys::fuzz_target;
use poker_showdown::core::{Classifiable, Hand, PokerError, HAND_SIZE};

fuzz_target!(|hand: Hand| {
    let before = hand.clone();
    let result = hand.classify();
    if hand.len() == HAND_SIZE {
        assert!(result.is_ok());
        let mut reversed = hand.cards().to_vec();
        reversed.reverse();
        assert_eq!(result, reversed.classify());
    } else {
        assert_eq!(Err(PokerError::InvalidHandSize(hand.len())), result);
    }
    assert_eq!(before, hand);
});
