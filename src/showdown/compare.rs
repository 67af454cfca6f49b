use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, instrument};

use crate::core::{Classifiable, Hand, HandCategory, PokerError};

/// Who won a two hand showdown.
///
/// Hand A is called "Black" and hand B "White" when displayed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Outcome {
    /// The first hand is stronger.
    AWins,
    /// The second hand is stronger.
    BWins,
    /// Neither hand is stronger.
    Tie,
}

impl Outcome {
    /// The outcome with the two hands swapped.
    pub fn reverse(self) -> Self {
        match self {
            Self::AWins => Self::BWins,
            Self::BWins => Self::AWins,
            Self::Tie => Self::Tie,
        }
    }
}

/// `Greater` means hand A is stronger.
impl From<Ordering> for Outcome {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Self::AWins,
            Ordering::Less => Self::BWins,
            Ordering::Equal => Self::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AWins => "Black wins.",
            Self::BWins => "White wins.",
            Self::Tie => "Tie.",
        })
    }
}

/// Everything decided while comparing two hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Showdown {
    /// Category of hand A.
    pub first: HandCategory,
    /// Category of hand B.
    pub second: HandCategory,
    /// Who won.
    pub outcome: Outcome,
}

/// Break a tie between two hands of the same category.
///
/// Both hands' values are sorted (on copies) and compared from the highest
/// card down; the first difference decides. There is no pair-before-kicker
/// logic, so a pair of twos with an ace kicker beats a pair of kings with a
/// queen high kicker. Suits never break ties.
fn compare_values(a: &Hand, b: &Hand) -> Ordering {
    let a_values = a.sorted_values();
    let b_values = b.sorted_values();
    a_values.iter().rev().cmp(b_values.iter().rev())
}

/// Classify both hands and decide the winner.
///
/// The stronger category wins. Equal categories fall back to the highest
/// card first comparison described on [`compare_values`].
///
/// # Examples
///
/// ```
/// use poker_showdown::core::{Hand, HandCategory};
/// use poker_showdown::showdown::{showdown, Outcome};
///
/// let black = Hand::new_from_str("2H 2D 2S 9C KD").unwrap();
/// let white = Hand::new_from_str("2C 3H 4S 5C 6H").unwrap();
///
/// let result = showdown(&black, &white).unwrap();
/// assert_eq!(HandCategory::ThreeOfAKind, result.first);
/// assert_eq!(HandCategory::Straight, result.second);
/// assert_eq!(Outcome::BWins, result.outcome);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn showdown(a: &Hand, b: &Hand) -> Result<Showdown, PokerError> {
    let first = a.classify()?;
    let second = b.classify()?;

    let ordering = first
        .ordinal()
        .cmp(&second.ordinal())
        .then_with(|| compare_values(a, b));
    let outcome = Outcome::from(ordering);

    debug!(?first, ?second, ?outcome, "Compared hands");
    Ok(Showdown {
        first,
        second,
        outcome,
    })
}

/// Compare two five card hands.
///
/// Fails with `InvalidHandSize` if either hand doesn't have five cards,
/// hand A is checked first.
///
/// # Examples
///
/// ```
/// use poker_showdown::core::Hand;
/// use poker_showdown::showdown::{compare, Outcome};
///
/// let black = Hand::new_from_str("2H 3D 5S 9C KD").unwrap();
/// let white = Hand::new_from_str("2C 3H 4S 8C AH").unwrap();
/// assert_eq!(Ok(Outcome::BWins), compare(&black, &white));
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Result<Outcome, PokerError> {
    showdown(a, b).map(|s| s.outcome)
}
