use std::fmt;

use tracing::trace;

use super::{Card, Hand, PokerError};

/// Number of cards a hand must hold to be classified.
pub const HAND_SIZE: usize = 5;

/// The nine hand categories, weakest first.
///
/// The discriminant is the strength ordinal and the derived `Ord` follows it,
/// so categories compare by poker strength and never by name.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
#[repr(u8)]
pub enum HandCategory {
    /// The lowest category.
    /// No matches
    HighCard = 0,
    /// One Card matches another.
    Pair = 1,
    /// Two different pair of matching cards.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five cards in a sequence
    Straight = 4,
    /// Five cards of the same suit
    Flush = 5,
    /// Three of one value and two of another value
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five cards in a sequence all for the same suit.
    StraightFlush = 8,
}

const CATEGORIES: [HandCategory; 9] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
];

impl HandCategory {
    /// All categories, weakest first.
    pub const fn categories() -> [Self; 9] {
        CATEGORIES
    }

    /// Strength ordinal, `HighCard` is 0 and `StraightFlush` is 8.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bit mask of five adjacent values.
const FIVE_IN_A_ROW: u32 = 0b1_1111;

/// Given the bitset of the values in a hand with no repeated values, is it
/// five values in a row?
///
/// Ace only counts high. `A 2 3 4 5` is not a straight here.
fn is_straight(value_set: u32) -> bool {
    value_set != 0 && value_set >> value_set.trailing_zeros() == FIVE_IN_A_ROW
}

/// Anything that can be classified as a five card poker hand. There are
/// implementations for `Hand`, `Vec<Card>` and `[Card]`.
pub trait Classifiable {
    /// The cards to classify.
    fn cards(&self) -> &[Card];

    /// Work out the hand category.
    ///
    /// Fails with `InvalidHandSize` unless there are exactly five cards.
    /// Card order doesn't matter and the cards are not modified.
    ///
    /// # Examples
    /// ```
    /// use poker_showdown::core::{Classifiable, Hand, HandCategory};
    ///
    /// let hand = Hand::new_from_str("2H 2D 5S 9C KD").unwrap();
    /// assert_eq!(Ok(HandCategory::Pair), hand.classify());
    /// ```
    fn classify(&self) -> Result<HandCategory, PokerError> {
        let cards = self.cards();
        if cards.len() != HAND_SIZE {
            return Err(PokerError::InvalidHandSize(cards.len()));
        }

        // use for bitset
        let mut suit_set: u32 = 0;
        // Use for bitset
        let mut value_set: u32 = 0;
        let mut value_to_count: [u8; 13] = [0; 13];

        for c in cards {
            let v = c.value as u8;
            suit_set |= 1 << c.suit as u8;
            value_set |= 1 << v;
            value_to_count[v as usize] += 1;
        }

        // How many values appear once, twice, three times and so on.
        // A count of five only happens with repeated cards and is folded
        // into four.
        let mut count_of_counts: [u8; 5] = [0; 5];
        for &count in value_to_count.iter().filter(|&&c| c > 0) {
            count_of_counts[usize::from(count.min(4))] += 1;
        }

        let is_flush = suit_set.count_ones() == 1;
        let straight = value_set.count_ones() == 5 && is_straight(value_set);

        let category = if is_flush && straight {
            HandCategory::StraightFlush
        } else if count_of_counts[4] > 0 {
            HandCategory::FourOfAKind
        } else if count_of_counts[3] > 0 && count_of_counts[2] > 0 {
            HandCategory::FullHouse
        } else if is_flush {
            HandCategory::Flush
        } else if straight {
            HandCategory::Straight
        } else if count_of_counts[3] > 0 {
            HandCategory::ThreeOfAKind
        } else if count_of_counts[2] == 2 {
            HandCategory::TwoPair
        } else if count_of_counts[2] == 1 {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        };

        trace!(?category, value_set, suit_set, "Classified hand");
        Ok(category)
    }
}

impl Classifiable for Hand {
    fn cards(&self) -> &[Card] {
        Hand::cards(self)
    }
}

impl Classifiable for [Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Classifiable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

/// Classify a hand. Same as [`Classifiable::classify`].
pub fn classify(hand: &Hand) -> Result<HandCategory, PokerError> {
    hand.classify()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    fn category(s: &str) -> Result<HandCategory, PokerError> {
        Hand::new_from_str(s).unwrap().classify()
    }

    /// Every ordering of the cards, generated with Heap's algorithm.
    fn permutations(cards: &[Card]) -> Vec<Vec<Card>> {
        fn heap(k: usize, cards: &mut Vec<Card>, out: &mut Vec<Vec<Card>>) {
            if k <= 1 {
                out.push(cards.clone());
                return;
            }
            heap(k - 1, cards, out);
            for i in 0..k - 1 {
                if k % 2 == 0 {
                    cards.swap(i, k - 1);
                } else {
                    cards.swap(0, k - 1);
                }
                heap(k - 1, cards, out);
            }
        }
        let mut work = cards.to_vec();
        let mut out = Vec::new();
        heap(work.len(), &mut work, &mut out);
        out
    }

    #[test]
    fn test_ordinals() {
        for (i, c) in HandCategory::categories().iter().enumerate() {
            assert_eq!(i as u8, c.ordinal());
        }
        assert_eq!(0, HandCategory::HighCard.ordinal());
        assert_eq!(8, HandCategory::StraightFlush.ordinal());
    }

    #[test]
    fn test_cmp_is_strength_not_name() {
        // Alphabetically these would be Flush < Four of a Kind < Full House.
        assert!(HandCategory::Flush < HandCategory::FullHouse);
        assert!(HandCategory::FullHouse < HandCategory::FourOfAKind);
        assert!(HandCategory::Flush < HandCategory::FourOfAKind);
        assert!(HandCategory::Straight < HandCategory::Flush);
        assert!(HandCategory::HighCard < HandCategory::Pair);
    }

    #[test]
    fn test_category_ordering() {
        let cats = HandCategory::categories();
        for pair in cats.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_names() {
        assert_eq!("High Card", HandCategory::HighCard.to_string());
        assert_eq!("Three of a Kind", HandCategory::ThreeOfAKind.to_string());
        assert_eq!("Straight Flush", HandCategory::StraightFlush.to_string());
    }

    #[test]
    fn test_high_card_hand() {
        assert_eq!(Ok(HandCategory::HighCard), category("2H 3D 5S 9C KD"));
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(Ok(HandCategory::Pair), category("2H 2D 5S 9C KD"));
    }

    #[test]
    fn test_two_pair() {
        assert_eq!(Ok(HandCategory::TwoPair), category("AD AC 9D 9C TS"));
    }

    #[test]
    fn test_three_of_a_kind() {
        assert_eq!(Ok(HandCategory::ThreeOfAKind), category("2H 2D 2S 9C KD"));
    }

    #[test]
    fn test_straight() {
        assert_eq!(Ok(HandCategory::Straight), category("2C 3H 4S 5C 6H"));
        assert_eq!(Ok(HandCategory::Straight), category("TD JH QS KC AH"));
    }

    #[test]
    fn test_flush() {
        assert_eq!(Ok(HandCategory::Flush), category("AD 8D 9D TD 5D"));
    }

    #[test]
    fn test_full_house() {
        assert_eq!(Ok(HandCategory::FullHouse), category("AD AC 9D 9C 9S"));
    }

    #[test]
    fn test_four_of_a_kind() {
        assert_eq!(Ok(HandCategory::FourOfAKind), category("AD AC AS AH TS"));
    }

    #[test]
    fn test_straight_flush() {
        assert_eq!(Ok(HandCategory::StraightFlush), category("9S TS JS QS KS"));
        assert_eq!(Ok(HandCategory::StraightFlush), category("AS KS QS JS TS"));
    }

    #[test]
    fn test_wheel_is_not_a_straight() {
        // Ace is only ever high.
        assert_eq!(Ok(HandCategory::HighCard), category("AD 2C 3S 4H 5S"));
        assert_eq!(Ok(HandCategory::Flush), category("AD 2D 3D 4D 5D"));
    }

    #[test]
    fn test_no_wrap_around() {
        assert_eq!(Ok(HandCategory::HighCard), category("QD KC AS 2H 3S"));
    }

    #[test]
    fn test_gap_is_not_a_straight() {
        assert_eq!(Ok(HandCategory::HighCard), category("2C 3H 4S 5C 7H"));
    }

    #[test]
    fn test_five_of_a_value_is_four_of_a_kind() {
        // Only possible with repeated cards.
        assert_eq!(Ok(HandCategory::FourOfAKind), category("7D 7C 7S 7H 7H"));
        assert_eq!(Ok(HandCategory::FourOfAKind), category("7D 7D 7D 7D 7D"));
    }

    #[test]
    fn test_repeated_cards_are_a_multiset() {
        assert_eq!(Ok(HandCategory::Pair), category("2H 2H 5S 9C KD"));
    }

    #[test]
    fn test_wrong_size() {
        assert_eq!(Err(PokerError::InvalidHandSize(4)), category("2H 3D 5S 9C"));
        assert_eq!(
            Err(PokerError::InvalidHandSize(6)),
            category("2H 3D 5S 9C KD AS")
        );
        assert_eq!(Err(PokerError::InvalidHandSize(0)), category(""));
    }

    #[test]
    fn test_slice_and_vec() {
        let cards = vec![
            Card::new(Value::Ace, Suit::Spade),
            Card::new(Value::King, Suit::Spade),
            Card::new(Value::Queen, Suit::Spade),
            Card::new(Value::Jack, Suit::Spade),
            Card::new(Value::Ten, Suit::Spade),
        ];
        assert_eq!(Ok(HandCategory::StraightFlush), cards.classify());
        assert_eq!(Ok(HandCategory::StraightFlush), cards[..].classify());
        assert_eq!(
            Err(PokerError::InvalidHandSize(3)),
            cards[..3].classify()
        );
    }

    #[test_log::test]
    fn test_order_independent() {
        let hands = [
            "2H 3D 5S 9C KD",
            "2H 2D 5S 9C KD",
            "AD AC 9D 9C TS",
            "2H 2D 2S 9C KD",
            "2C 3H 4S 5C 6H",
            "AD 8D 9D TD 5D",
            "AD AC 9D 9C 9S",
            "AD AC AS AH TS",
            "9S TS JS QS KS",
        ];
        for s in hands {
            let hand = Hand::new_from_str(s).unwrap();
            let expected = hand.classify().unwrap();
            let perms = permutations(hand.cards());
            assert_eq!(120, perms.len());
            for p in perms {
                assert_eq!(Ok(expected), p.classify(), "{s} reordered as {p:?}");
            }
        }
    }

    #[test]
    fn test_idempotent_and_pure() {
        let hand = Hand::new_from_str("KD 9C 5S 3D 2H").unwrap();
        let before = hand.clone();
        assert_eq!(classify(&hand), classify(&hand));
        assert_eq!(before, hand);
    }

    #[test]
    fn test_random_hands_shuffle() {
        let mut rng = StdRng::seed_from_u64(420);
        let mut deck: Vec<Card> = Value::values()
            .into_iter()
            .flat_map(|v| Suit::suits().into_iter().map(move |s| Card::new(v, s)))
            .collect();

        for _ in 0..500 {
            deck.shuffle(&mut rng);
            let mut cards = deck[..5].to_vec();
            let expected = cards.classify().unwrap();
            cards.shuffle(&mut rng);
            assert_eq!(Ok(expected), cards.classify());
        }
    }
}
