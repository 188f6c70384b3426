//! Showdown settlement for the three Ultimate Texas Hold'em wagers.
//!
//! Every amount returned here is the total handed back to the player: stake
//! plus winnings on a win, the stake alone on a push, zero on a loss.

use crate::evaluator::{compare, Category, EvaluatedHand};
use core::cmp::Ordering;
use core::fmt;

/// The three stakes a seat has on the table at showdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wagers {
    pub ante: u64,
    pub blind: u64,
    pub play: u64,
}

impl Wagers {
    pub const fn new(ante: u64, blind: u64, play: u64) -> Self {
        Self { ante, blind, play }
    }

    pub const fn total(&self) -> u64 {
        self.ante.saturating_add(self.blind).saturating_add(self.play)
    }
}

/// Amounts returned for each wager.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Payout {
    pub ante: u64,
    pub blind: u64,
    pub play: u64,
}

impl Payout {
    pub const fn total(&self) -> u64 {
        self.ante.saturating_add(self.blind).saturating_add(self.play)
    }

    /// Returns minus stakes; negative when the seat lost money on the hand.
    pub fn net(&self, wagers: &Wagers) -> i128 {
        i128::from(self.total()) - i128::from(wagers.total())
    }
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ante: ${}, Blind: ${}, Play: ${}", self.ante, self.blind, self.play)
    }
}

/// Blind bet odds, `win` paid per `per` staked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindOdds {
    pub win: u64,
    pub per: u64,
}

impl BlindOdds {
    const fn new(win: u64, per: u64) -> Self {
        Self { win, per }
    }

    /// Odds paid on a winning blind, or `None` when the hand only pushes.
    pub fn for_hand(hand: &EvaluatedHand) -> Option<Self> {
        match hand.category {
            Category::StraightFlush if hand.is_royal() => Some(Self::new(500, 1)),
            Category::StraightFlush => Some(Self::new(50, 1)),
            Category::FourOfAKind => Some(Self::new(10, 1)),
            Category::FullHouse => Some(Self::new(3, 1)),
            Category::Flush => Some(Self::new(3, 2)),
            Category::Straight => Some(Self::new(1, 1)),
            _ => None,
        }
    }

    /// Stake plus winnings. Fractional winnings truncate toward zero.
    pub const fn pay(self, stake: u64) -> u64 {
        stake.saturating_add(stake.saturating_mul(self.win) / self.per)
    }
}

impl fmt::Display for BlindOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.win, self.per)
    }
}

/// Dealer must hold at least a pair for the ante to be paid out.
pub fn dealer_qualifies(dealer: &EvaluatedHand) -> bool {
    dealer.category >= Category::Pair
}

/// Even money on a win, stake back on a push, nothing on a loss.
const fn even_money(stake: u64, outcome: Ordering) -> u64 {
    match outcome {
        Ordering::Greater => stake.saturating_mul(2),
        Ordering::Equal => stake,
        Ordering::Less => 0,
    }
}

/// Settle ante, blind and play for one seat.
///
/// `dealer_qualifies` is taken as an input (normally [`dealer_qualifies`] of
/// the dealer's hand); when it is false the ante pushes whatever the outcome.
///
/// ```
/// use uth_rs::cards::parse_cards;
/// use uth_rs::evaluator::classify;
/// use uth_rs::payout::{resolve, Wagers};
///
/// let royal = classify(&parse_cards("Th Jh Qh Kh Ah").unwrap()).unwrap();
/// let dealer = classify(&parse_cards("2c 2d 7s 9h Kd").unwrap()).unwrap();
/// let payout = resolve(&royal, &dealer, true, Wagers::new(10, 10, 40));
/// assert_eq!(payout.ante, 20);
/// assert_eq!(payout.blind, 5010);
/// assert_eq!(payout.play, 80);
/// ```
pub fn resolve(
    player: &EvaluatedHand,
    dealer: &EvaluatedHand,
    dealer_qualifies: bool,
    wagers: Wagers,
) -> Payout {
    let outcome = compare(player, dealer);

    let play = even_money(wagers.play, outcome);

    let ante = if dealer_qualifies { even_money(wagers.ante, outcome) } else { wagers.ante };

    let blind = match outcome {
        Ordering::Greater => {
            BlindOdds::for_hand(player).map_or(wagers.blind, |odds| odds.pay(wagers.blind))
        }
        Ordering::Equal => wagers.blind,
        Ordering::Less => 0,
    };

    Payout { ante, blind, play }
}
