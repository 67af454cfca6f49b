use std::fmt;

use super::PokerError;

/// Card face value. The ordinal (`value as u8`) is the strength order used by
/// every ranking decision, `Two` is 0 and `Ace` is 12.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, lowest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// let values = Value::values();
    /// assert_eq!(Value::Two, values[0]);
    /// assert_eq!(Value::Ace, values[12]);
    /// ```
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Look up the value for its ordinal. `None` past `Ace`.
    pub fn from_u8(v: u8) -> Option<Self> {
        VALUES.get(v as usize).copied()
    }

    /// Parse the rank character of a card token.
    ///
    /// Only the upper case letters `T`, `J`, `Q`, `K`, `A` and the digits
    /// `2` through `9` are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// The character used for this value in a card token.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Upper case name used when displaying a card.
    pub fn name(self) -> &'static str {
        match self {
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enum for the four different suits. Suits are only ever compared for
/// equality when ranking; the derived order exists so cards can live in
/// sorted collections.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Parse the suit character of a card token (`C`, `D`, `H` or `S`).
    ///
    /// # Examples
    ///
    /// ```
    /// use poker_showdown::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Heart), Suit::from_char('H'));
    /// assert_eq!(None, Suit::from_char('h'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Self::Club),
            'D' => Some(Self::Diamond),
            'H' => Some(Self::Heart),
            'S' => Some(Self::Spade),
            _ => None,
        }
    }

    /// The character used for this suit in a card token.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Heart => 'H',
            Self::Spade => 'S',
        }
    }

    /// Upper case plural name used when displaying a card.
    pub fn name(self) -> &'static str {
        match self {
            Self::Club => "CLUBS",
            Self::Diamond => "DIAMONDS",
            Self::Heart => "HEARTS",
            Self::Spade => "SPADES",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The two character token for this card, e.g. `2H`.
    pub fn short(&self) -> String {
        let mut s = String::with_capacity(2);
        s.push(self.value.to_char());
        s.push(self.suit.to_char());
        s
    }
}

/// Displays as `"<VALUE> of <SUIT>"`, e.g. `TWO of HEARTS`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Parse a single two character token such as `KD`.
impl TryFrom<&str> for Card {
    type Error = PokerError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let invalid = || PokerError::InvalidToken(token.to_string());
        let mut chars = token.chars();
        let (Some(v), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let value = Value::from_char(v).ok_or_else(invalid)?;
        let suit = Suit::from_char(s).ok_or_else(invalid)?;
        Ok(Self::new(value, suit))
    }
}

impl std::str::FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::try_from(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Value::Three, Suit::Spade);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Spade);
        let c3 = Card::new(Value::Four, Suit::Club);

        assert!(c1 == c1);
        assert!(c1 < c2);
        assert!(c2 > c1);
        assert_ne!(c2, c3);
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_value_ordinals() {
        for (i, v) in Value::values().iter().enumerate() {
            assert_eq!(i as u8, *v as u8);
            assert_eq!(Some(*v), Value::from_u8(i as u8));
        }
        assert_eq!(None, Value::from_u8(13));
    }

    #[test]
    fn test_value_chars() {
        for v in Value::values() {
            assert_eq!(Some(v), Value::from_char(v.to_char()));
        }
        assert_eq!(None, Value::from_char('t'));
        assert_eq!(None, Value::from_char('0'));
    }

    #[test]
    fn test_suit_chars() {
        for s in Suit::suits() {
            assert_eq!(Some(s), Suit::from_char(s.to_char()));
        }
        assert_eq!(None, Suit::from_char('X'));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "TWO of HEARTS",
            Card::new(Value::Two, Suit::Heart).to_string()
        );
        assert_eq!(
            "TEN of CLUBS",
            Card::new(Value::Ten, Suit::Club).to_string()
        );
        assert_eq!(
            "ACE of SPADES",
            Card::new(Value::Ace, Suit::Spade).to_string()
        );
    }

    #[test]
    fn test_short() {
        assert_eq!("KD", Card::new(Value::King, Suit::Diamond).short());
        assert_eq!("TC", Card::new(Value::Ten, Suit::Club).short());
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            Ok(Card::new(Value::Nine, Suit::Club)),
            "9C".parse::<Card>()
        );
        assert_eq!(
            Err(PokerError::InvalidToken("1C".into())),
            Card::try_from("1C")
        );
        assert_eq!(
            Err(PokerError::InvalidToken("9X".into())),
            Card::try_from("9X")
        );
        assert_eq!(
            Err(PokerError::InvalidToken("10C".into())),
            Card::try_from("10C")
        );
        assert_eq!(Err(PokerError::InvalidToken("9".into())), Card::try_from("9"));
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
