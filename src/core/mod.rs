/// card.rs has value and suit.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// Errors shared by parsing, classification and comparison.
mod error;
/// Export `PokerError`
pub use self::error::PokerError;

/// Code related to an ordered set of cards and the text format for it.
mod hand;
/// Everything in there should be public.
pub use self::hand::{check_distinct, parse_hand, Hand};

/// Classify five card hands into one of nine categories.
mod rank;
/// Export `HandCategory`, `Classifiable`, and `classify`
pub use self::rank::{classify, Classifiable, HandCategory, HAND_SIZE};
