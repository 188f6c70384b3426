//! Decision policies: who decides Check or Bet for a seat.
//!
//! The table only ever asks a policy through [`DecisionPolicy`]; a policy sees a
//! [`PlayerView`] that hides every other seat's hole cards.

use crate::cards::Card;
use crate::payout::Wagers;
use crate::table::{Decision, PlayerStatus, Street};

/// Public information about another seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatSummary {
    pub position: usize,
    pub money: u64,
    pub wagers: Wagers,
    pub status: PlayerStatus,
    pub play_street: Option<Street>,
}

/// Everything one seat is allowed to see when it has to act.
#[derive(Debug, Clone)]
pub struct PlayerView<'a> {
    pub position: usize,
    pub hole: &'a [Card],
    pub community: &'a [Card],
    pub street: Street,
    pub pot: u64,
    pub money: u64,
    pub can_bet: bool,
    pub seats: Vec<SeatSummary>,
}

impl PlayerView<'_> {
    pub fn hole_is_pair(&self) -> bool {
        matches!(self.hole, [a, b] if a.rank() == b.rank())
    }

    /// Sum of the raw hole-card ranks, Ace = 1.
    pub fn hole_value(&self) -> u32 {
        self.hole.iter().map(|c| u32::from(c.rank().pip())).sum()
    }
}

pub trait DecisionPolicy {
    fn decide(&mut self, view: &PlayerView<'_>) -> Decision;

    fn name(&self) -> &str {
        "policy"
    }
}

/// Fixed rule: bet pre-flop with a pocket pair or a hole value of at least
/// `threshold`; check everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedPolicy {
    pub threshold: u32,
}

impl ScriptedPolicy {
    pub const DEFAULT_THRESHOLD: u32 = 20;

    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for ScriptedPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&mut self, view: &PlayerView<'_>) -> Decision {
        let strong = view.hole_value() >= self.threshold || view.hole_is_pair();
        if view.street == Street::PreFlop && view.can_bet && strong {
            Decision::Bet
        } else {
            Decision::Check
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn view<'a>(hole: &'a [Card], street: Street) -> PlayerView<'a> {
        PlayerView {
            position: 1,
            hole,
            community: &[],
            street,
            pot: 0,
            money: 100,
            can_bet: true,
            seats: Vec::new(),
        }
    }

    #[test]
    fn bets_preflop_on_high_value_or_pair() {
        let mut p = ScriptedPolicy::default();
        let kq = parse_cards("Kh Qd").unwrap(); // 13 + 12
        assert_eq!(p.decide(&view(&kq, Street::PreFlop)), Decision::Bet);
        let deuces = parse_cards("2h 2d").unwrap();
        assert_eq!(p.decide(&view(&deuces, Street::PreFlop)), Decision::Bet);
    }

    #[test]
    fn ace_counts_low_for_the_threshold() {
        let mut p = ScriptedPolicy::default();
        let ak = parse_cards("Ah Kd").unwrap(); // 1 + 13
        assert_eq!(p.decide(&view(&ak, Street::PreFlop)), Decision::Check);
    }

    #[test]
    fn checks_after_preflop_and_when_already_bet() {
        let mut p = ScriptedPolicy::default();
        let kk = parse_cards("Kh Kd").unwrap();
        assert_eq!(p.decide(&view(&kk, Street::Flop)), Decision::Check);
        assert_eq!(p.decide(&view(&kk, Street::River)), Decision::Check);
        let mut v = view(&kk, Street::PreFlop);
        v.can_bet = false;
        assert_eq!(p.decide(&v), Decision::Check);
    }
}
