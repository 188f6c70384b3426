//! Per-hand records produced by [`crate::game::Game::play_hand`], and their
//! console narration.

use crate::cards::Card;
use crate::evaluator::EvaluatedHand;
use crate::payout::{Payout, Wagers};
use crate::table::Street;
use core::cmp::Ordering;
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionKind {
    Bet(u64),
    Check,
    /// Asked to bet after the play bet was already made.
    AlreadyBet,
    /// Asked to bet without the money for it; treated as a check.
    CannotAfford { needed: u64 },
    /// Checked at the river without a play bet.
    Forfeited { ante: u64, blind: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRecord {
    pub position: usize,
    pub street: Street,
    pub kind: ActionKind,
}

impl fmt::Display for ActionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (p, s) = (self.position, self.street);
        match self.kind {
            ActionKind::Bet(amount) => write!(f, "Player {p} BET ${amount} on {s}"),
            ActionKind::Check => write!(f, "Player {p} CHECKED on {s}"),
            ActionKind::AlreadyBet => write!(f, "Player {p} already bet this hand, checking"),
            ActionKind::CannotAfford { needed } => {
                write!(f, "Player {p} cannot afford ${needed} on {s}, checking instead")
            }
            ActionKind::Forfeited { ante, blind } => {
                write!(f, "Player {p} CHECKED on {s} and folds (lost ${ante} ante, ${blind} blind)")
            }
        }
    }
}

/// Showdown result for one seat.
#[derive(Debug, Clone)]
pub struct SeatResult {
    pub position: usize,
    pub hole: Vec<Card>,
    pub best: EvaluatedHand,
    /// Player hand compared with the dealer's.
    pub outcome: Ordering,
    pub wagers: Wagers,
    pub payout: Payout,
    pub money_after: u64,
}

impl SeatResult {
    pub fn outcome_label(&self) -> &'static str {
        match self.outcome {
            Ordering::Greater => "BEATS",
            Ordering::Equal => "TIES",
            Ordering::Less => "LOSES TO",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HandReport {
    pub hand_number: u64,
    /// Seats that could not cover ante and blind and sat the hand out.
    pub sat_out: Vec<usize>,
    pub hole_cards: Vec<(usize, Vec<Card>)>,
    pub dealer_hole: Vec<Card>,
    pub community: Vec<Card>,
    pub actions: Vec<ActionRecord>,
    pub dealer_best: EvaluatedHand,
    pub dealer_qualifies: bool,
    pub results: Vec<SeatResult>,
}

impl HandReport {
    pub fn result_for(&self, position: usize) -> Option<&SeatResult> {
        self.results.iter().find(|r| r.position == position)
    }

    /// Total returned to all seats at showdown.
    pub fn total_returned(&self) -> u64 {
        self.results.iter().map(|r| r.payout.total()).sum()
    }
}

struct CardList<'a>(&'a [Card]);

impl fmt::Display for CardList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Display for HandReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Hand {} ---", self.hand_number)?;
        for p in &self.sat_out {
            writeln!(f, "Player {p} cannot afford ante and blind, sitting out")?;
        }
        for (p, cards) in &self.hole_cards {
            writeln!(f, "Player {p} received: {}", CardList(cards))?;
        }
        writeln!(f, "Dealer received: {}", CardList(&self.dealer_hole))?;
        for a in &self.actions {
            writeln!(f, "{a}")?;
        }
        writeln!(f, "Community cards: {}", CardList(&self.community))?;
        writeln!(
            f,
            "Dealer best: {} (tiebreakers: {}){}",
            self.dealer_best.category,
            self.dealer_best.tiebreakers,
            if self.dealer_qualifies { "" } else { " - does not qualify" }
        )?;
        for r in &self.results {
            writeln!(
                f,
                "Player {} - Best: {} (tiebreakers: {}) {} Dealer",
                r.position,
                r.best.category,
                r.best.tiebreakers,
                r.outcome_label()
            )?;
            writeln!(f, "Player {} returns - {} (now ${})", r.position, r.payout, r.money_after)?;
        }
        Ok(())
    }
}
