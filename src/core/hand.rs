use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use super::{Card, PokerError, Value};

/// An ordered sequence of cards as dealt or typed.
///
/// A `Hand` can hold any number of cards. Classifying and comparing need
/// exactly five and report `PokerError::InvalidHandSize` otherwise.
/// Duplicate cards are allowed, see [`check_distinct`] for callers that want
/// deck legality.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create a hand from cards in the order given.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a whitespace separated list of two character card tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::{Card, Hand, Suit, Value};
    ///
    /// let hand = Hand::new_from_str("2H 3D 5S 9C KD").unwrap();
    /// assert_eq!(5, hand.len());
    /// assert_eq!(Card::new(Value::Two, Suit::Heart), hand[0]);
    /// assert_eq!(Card::new(Value::King, Suit::Diamond), hand[4]);
    /// ```
    ///
    /// Anything that isn't a rank character followed by a suit character
    /// is an error.
    ///
    /// ```
    /// use poker_showdown::core::{Hand, PokerError};
    ///
    /// let err = Hand::new_from_str("2H 3D 5S 9C KX").unwrap_err();
    /// assert_eq!(PokerError::InvalidToken("KX".into()), err);
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        hand_string
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// How many cards are in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the hand holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in the order given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate the cards in the order given.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// A sorted copy of the card values, lowest first. The hand itself is
    /// left as it was.
    pub fn sorted_values(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.cards.iter().map(|c| c.value).collect();
        values.sort_unstable();
        values
    }
}

/// Parse a hand in the `"2H 3D 5S 9C KD"` format.
///
/// This is [`Hand::new_from_str`] under the name the text format is known by.
pub fn parse_hand(hand_string: &str) -> Result<Hand, PokerError> {
    Hand::new_from_str(hand_string)
}

impl FromStr for Hand {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new_from_str(s)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl<const N: usize> From<[Card; N]> for Hand {
    fn from(cards: [Card; N]) -> Self {
        Self::new(cards.to_vec())
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Displays every card as `"<VALUE> of <SUIT>"` separated by `", "`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

/// Check that no card shows up twice, within a hand or across the hands
/// given. Ranking never calls this; it's for callers that deal from a single
/// deck and want to reject impossible input.
///
/// # Examples
///
/// ```
/// use poker_showdown::core::{check_distinct, Hand, PokerError};
///
/// let black = Hand::new_from_str("2H 3D 5S 9C KD").unwrap();
/// let white = Hand::new_from_str("2C 3H 4S 8C AH").unwrap();
/// assert!(check_distinct(&[&black, &white]).is_ok());
///
/// let cheat = Hand::new_from_str("2H 3S 4S 8C AH").unwrap();
/// assert!(matches!(
///     check_distinct(&[&black, &cheat]),
///     Err(PokerError::DuplicateCard(_))
/// ));
/// ```
pub fn check_distinct(hands: &[&Hand]) -> Result<(), PokerError> {
    let mut seen = HashSet::with_capacity(hands.iter().map(|h| h.len()).sum());
    for card in hands.iter().flat_map(|h| h.iter()) {
        if !seen.insert(*card) {
            return Err(PokerError::DuplicateCard(*card));
        }
    }
    Ok(())
}
