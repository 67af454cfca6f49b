#![no_main]

extern crate arbitrary;
extern crate libfuzzer_sys;
extern crate poker_showdown;

use libfuzzer_sys::fuzz_target;
use poker_showdown::core::{Card, Hand};
use poker_showdown::showdown::{compare, Outcome};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub a: [Card; 5],
    pub b: [Card; 5],
}

fuzz_target!(|input: Input| {
    let a = Hand::from(input.a);
    let b = Hand::from(input.b);

    let ab = compare(&a, &b).unwrap();
    let ba = compare(&b, &a).unwrap();
    assert_eq!(ab, ba.reverse());
    assert_eq!(Outcome::Tie, compare(&a, &a).unwrap());
});
