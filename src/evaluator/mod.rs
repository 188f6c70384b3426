//! Hand classification, best-hand selection and comparison.
//!
//! Every ordering decision in this module goes through [`compare`]: category
//! first, then the tiebreaker signature element by element.

pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;

use crate::cards::Card;
use core::cmp::Ordering;
use core::fmt;

/// Number of cards in an evaluated poker hand.
pub const HAND_SIZE: usize = 5;

/// Poker hand category from weakest to strongest.
///
/// Ordering is defined by [`Category::ordinal`], not by declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::Pair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal().cmp(&other.ordinal())
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered rank values that break ties inside one category.
///
/// Stored inline (at most five values). Ace is 14, except as the top of the
/// wheel straight where the high card is 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tiebreakers {
    values: [u8; HAND_SIZE],
    len: u8,
}

impl Tiebreakers {
    /// Keeps at most [`HAND_SIZE`] values; a category never needs more.
    pub fn from_slice(values: &[u8]) -> Self {
        debug_assert!(values.len() <= HAND_SIZE);
        let len = values.len().min(HAND_SIZE);
        let mut out = [0u8; HAND_SIZE];
        out[..len].copy_from_slice(&values[..len]);
        Self { values: out, len: len as u8 }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }

    pub fn first(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Ord for Tiebreakers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for Tiebreakers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Tiebreakers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// An evaluated five-card hand.
///
/// Equality and ordering use `(category, tiebreakers)` only; `cards` records
/// which five cards produced the result and is informational.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct EvaluatedHand {
    pub category: Category,
    pub tiebreakers: Tiebreakers,
    pub cards: [Card; HAND_SIZE],
}

impl EvaluatedHand {
    /// Ace-high straight flush.
    pub fn is_royal(&self) -> bool {
        self.category == Category::StraightFlush && self.tiebreakers.first() == Some(14)
    }
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for EvaluatedHand {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other) == Ordering::Equal
    }
}

impl Eq for EvaluatedHand {}

impl fmt::Display for EvaluatedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} [", self.category, self.tiebreakers)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid input: expected {expected} cards, got {got}")]
    InvalidInput { expected: &'static str, got: usize },
}

/// Classify exactly five cards.
///
/// ```
/// use uth_rs::cards::parse_cards;
/// use uth_rs::evaluator::{classify, Category};
///
/// let wheel = parse_cards("A♠ 2♥ 3♦ 4♣ 5♠").unwrap();
/// let hand = classify(&wheel).unwrap();
/// assert_eq!(hand.category, Category::Straight);
/// assert_eq!(hand.tiebreakers.as_slice(), &[5]);
/// ```
pub fn classify(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    let five: &[Card; HAND_SIZE] = cards
        .try_into()
        .map_err(|_| EvalError::InvalidInput { expected: "exactly 5", got: cards.len() })?;
    Ok(evaluate_five(five))
}

/// Evaluate exactly five cards; detects category and builds the tiebreakers.
pub fn evaluate_five(cards: &[Card; HAND_SIZE]) -> EvaluatedHand {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    // Priority order, strongest first; the first detector that matches wins.
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis).map(|tb| analysis.build(d.category(), tb)))
        .unwrap_or_else(|| analysis.high_card())
}

/// Best five-card hand out of five or more cards (seven at a showdown).
///
/// Every 5-card subset is classified and the maximum under [`compare`] kept.
///
/// ```
/// use uth_rs::cards::parse_cards;
/// use uth_rs::evaluator::{best_hand, Category};
///
/// let seven = parse_cards("Ah Kh 2c Qh Jh 9d Th").unwrap();
/// let best = best_hand(&seven).unwrap();
/// assert!(best.is_royal());
/// assert_eq!(best.category, Category::StraightFlush);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<EvaluatedHand, EvalError> {
    use combinations::FiveCardCombinations;

    let invalid = || EvalError::InvalidInput { expected: "at least 5", got: cards.len() };
    if cards.len() < HAND_SIZE {
        return Err(invalid());
    }

    let mut best: Option<EvaluatedHand> = None;
    for indices in FiveCardCombinations::new(cards.len()) {
        let eval = evaluate_five(&indices.map(|i| cards[i]));
        if best.as_ref().map_or(true, |b| compare(&eval, b).is_gt()) {
            best = Some(eval);
        }
    }

    best.ok_or_else(invalid)
}

/// Total order over evaluated hands: category, then tiebreakers in sequence.
///
/// ```
/// use uth_rs::cards::parse_cards;
/// use uth_rs::evaluator::{classify, compare};
/// use std::cmp::Ordering;
///
/// let full_house = classify(&parse_cards("2c 2d 2h 3s 3c").unwrap()).unwrap();
/// let flush = classify(&parse_cards("Ah Kh Qh Jh 9h").unwrap()).unwrap();
/// assert_eq!(compare(&full_house, &flush), Ordering::Greater);
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.tiebreakers.cmp(&b.tiebreakers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> EvaluatedHand {
        classify(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn classify_rejects_wrong_card_counts() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(
            classify(&four).unwrap_err(),
            EvalError::InvalidInput { expected: "exactly 5", got: 4 }
        );
        let six = parse_cards("As Ks Qs Js Ts 9s").unwrap();
        assert!(matches!(classify(&six), Err(EvalError::InvalidInput { got: 6, .. })));
    }

    #[test]
    fn best_hand_rejects_short_input() {
        let four = parse_cards("As Ks Qs Js").unwrap();
        assert_eq!(
            best_hand(&four).unwrap_err(),
            EvalError::InvalidInput { expected: "at least 5", got: 4 }
        );
        assert!(best_hand(&[]).is_err());
    }

    #[test]
    fn tiebreaker_shapes_per_category() {
        assert_eq!(eval("Ah Kh Qh Jh Th").tiebreakers.as_slice(), &[14]);
        assert_eq!(eval("9c 9d 9h 9s Ac").tiebreakers.as_slice(), &[9, 14]);
        assert_eq!(eval("3c 3d 3h Js Jc").tiebreakers.as_slice(), &[3, 11]);
        assert_eq!(eval("Kh Th 8h 6h 3h").tiebreakers.as_slice(), &[13, 10, 8, 6, 3]);
        assert_eq!(eval("9c 8d 7h 6s 5c").tiebreakers.as_slice(), &[9]);
        assert_eq!(eval("Qc Qd Qh Ts 2c").tiebreakers.as_slice(), &[12, 10, 2]);
        assert_eq!(eval("Jc Jd 9c 9h As").tiebreakers.as_slice(), &[11, 9, 14]);
        assert_eq!(eval("Ah Ad Ts 9c 2d").tiebreakers.as_slice(), &[14, 10, 9, 2]);
        assert_eq!(eval("Ah Kd 7s 5c 2d").tiebreakers.as_slice(), &[14, 13, 7, 5, 2]);
    }

    #[test]
    fn straight_flush_is_never_a_plain_flush() {
        let sf = eval("5h 6h 7h 8h 9h");
        assert_eq!(sf.category, Category::StraightFlush);
        assert!(!sf.is_royal());
        let steel_wheel = eval("Ad 2d 3d 4d 5d");
        assert_eq!(steel_wheel.category, Category::StraightFlush);
        assert_eq!(steel_wheel.tiebreakers.as_slice(), &[5]);
        assert!(!steel_wheel.is_royal());
    }

    #[test]
    fn category_dominates_tiebreakers() {
        let low_full_house = eval("2c 2d 2h 3s 3c");
        let top_flush = eval("Ah Kh Qh Jh 9h");
        assert!(low_full_house > top_flush);
        assert_eq!(compare(&top_flush, &low_full_house), Ordering::Less);
    }

    #[test]
    fn equal_signatures_compare_equal_regardless_of_suits() {
        let a = eval("Ah Kd 7s 5c 2d");
        let b = eval("Ac Kh 7d 5s 2h");
        assert_eq!(compare(&a, &b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn category_order_uses_ordinals() {
        for w in Category::ALL.windows(2) {
            assert!(w[0] < w[1]);
            assert_eq!(w[0].ordinal() + 1, w[1].ordinal());
        }
        assert_eq!(Category::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn best_hand_picks_highest_subset() {
        let seven = parse_cards("2c 2d 2h 7s 7c Kd 3s").unwrap();
        let best = best_hand(&seven).unwrap();
        assert_eq!(best.category, Category::FullHouse);
        assert_eq!(best.tiebreakers.as_slice(), &[2, 7]);

        // Exactly five cards: the single subset is the classification.
        let five = parse_cards("Ah Kd 7s 5c 2d").unwrap();
        assert_eq!(best_hand(&five).unwrap(), classify(&five).unwrap());
    }

    #[test]
    fn display_shows_category_and_signature() {
        let h = eval("Ah Kh Qh Jh Th");
        assert!(h.to_string().starts_with("Straight Flush (14) ["));
        assert_eq!(Tiebreakers::from_slice(&[11, 9, 14]).to_string(), "(11, 9, 14)");
    }
}
