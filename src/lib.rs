//! Five card poker hand classification and two hand showdowns.
//!
//! Hands are written as five whitespace separated tokens, each a rank
//! character (`23456789TJQKA`) followed by a suit character (`CDHS`).
//!
//! ```
//! use poker_showdown::core::{Classifiable, Hand, HandCategory};
//! use poker_showdown::showdown::{compare, Outcome};
//!
//! let black = Hand::new_from_str("2H 3D 5S 9C KD").unwrap();
//! let white = Hand::new_from_str("2C 3H 4S 8C AH").unwrap();
//!
//! assert_eq!(Ok(HandCategory::HighCard), black.classify());
//! assert_eq!(Ok(Outcome::BWins), compare(&black, &white));
//! ```
//!
//! Aces are always high: `A 2 3 4 5` is not a straight. Ties between hands
//! of the same category are broken by comparing all five values from the
//! highest down, not by pair then kicker.

/// Cards, hands, and hand categories.
pub mod core;
/// Comparing two hands.
pub mod showdown;
