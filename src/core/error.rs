use thiserror::Error;

use super::Card;

/// Errors returned while parsing, classifying or comparing hands.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum PokerError {
    #[error("Expected a hand of exactly 5 cards, found {0}")]
    InvalidHandSize(usize),

    #[error("Invalid card token {0:?}, expected a rank from 23456789TJQKA followed by a suit from CDHS")]
    InvalidToken(String),

    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
}
