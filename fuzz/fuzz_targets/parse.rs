#![no_main]

extern crate libfuzzer_sys;
extern crate poker_showdown;

use libfuzzer_sys::fuzz_target;
use poker_showdown::core::{Card, Hand};

fuzz_target!(|data: &str| {
    if let Ok(hand) = Hand::new_from_str(data) {
        // Every parsed card prints back to the token it came from.
        let tokens: Vec<String> = hand.iter().map(Card::short).collect();
        let expected: Vec<&str> = data.split_whitespace().collect();
        assert_eq!(expected, tokens);
    }
});
