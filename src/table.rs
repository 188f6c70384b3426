use crate::cards::Card;
use crate::hand::{Board, HandError, HoleCards};
use crate::payout::Wagers;
use core::fmt;

/// Betting rounds in the order they are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    PreFlop,
    Flop,
    River,
}

impl Street {
    pub const ALL: [Street; 3] = [Street::PreFlop, Street::Flop, Street::River];

    /// Play bet size as a multiple of the base bet: 4x, 2x, 1x.
    pub const fn multiplier(self) -> u64 {
        match self {
            Street::PreFlop => 4,
            Street::Flop => 2,
            Street::River => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Check,
    Bet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerStatus {
    Active,
    Folded,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WagerError {
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("play bet already placed this hand")]
    AlreadyBet,
    #[error("seat is not active")]
    Inactive,
}

/// What a check did to the seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Checked,
    /// Checked at the river without a play bet: the seat folds and forfeits
    /// its ante and blind.
    Forfeited { ante: u64, blind: u64 },
}

pub const MAX_SEATS: usize = 6;

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) position: usize,
    pub(crate) money: u64,
    pub(crate) hole: Vec<Card>,
    pub(crate) wagers: Wagers,
    pub(crate) play_street: Option<Street>,
    pub(crate) status: PlayerStatus,
}

impl Player {
    pub const DEFAULT_MONEY: u64 = 1_000_000;

    /// Seat positions are 1-based, 1..=6.
    pub fn new(position: usize, money: u64) -> Self {
        debug_assert!((1..=MAX_SEATS).contains(&position));
        Self {
            position,
            money,
            hole: Vec::with_capacity(2),
            wagers: Wagers::default(),
            play_street: None,
            status: PlayerStatus::Active,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn wagers(&self) -> Wagers {
        self.wagers
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// Hole cards once both have been dealt.
    pub fn hole_cards(&self) -> Result<HoleCards, HandError> {
        HoleCards::from_slice(&self.hole)
    }

    pub fn play_street(&self) -> Option<Street> {
        self.play_street
    }

    /// The play bet can be made once per hand.
    pub fn can_bet(&self) -> bool {
        self.play_street.is_none()
    }

    pub fn can_afford(&self, amount: u64) -> bool {
        self.money >= amount
    }

    pub fn total_investment(&self) -> u64 {
        self.wagers.total()
    }

    /// Sum of the raw hole-card ranks, Ace = 1.
    pub fn hand_value(&self) -> u32 {
        self.hole.iter().map(|c| u32::from(c.rank().pip())).sum()
    }

    fn take(&mut self, amount: u64) -> Result<(), WagerError> {
        if !self.is_active() {
            return Err(WagerError::Inactive);
        }
        if !self.can_afford(amount) {
            return Err(WagerError::InsufficientFunds { needed: amount, available: self.money });
        }
        self.money -= amount;
        Ok(())
    }

    pub fn place_ante(&mut self, amount: u64) -> Result<(), WagerError> {
        self.take(amount)?;
        self.wagers.ante = amount;
        Ok(())
    }

    pub fn place_blind(&mut self, amount: u64) -> Result<(), WagerError> {
        self.take(amount)?;
        self.wagers.blind = amount;
        Ok(())
    }

    /// Place the play bet, `base` times the street multiplier. Returns the
    /// amount staked.
    pub fn place_play(&mut self, base: u64, street: Street) -> Result<u64, WagerError> {
        if !self.can_bet() {
            return Err(WagerError::AlreadyBet);
        }
        let amount = base.saturating_mul(street.multiplier());
        self.take(amount)?;
        self.wagers.play = amount;
        self.play_street = Some(street);
        Ok(amount)
    }

    pub fn check(&mut self, street: Street) -> CheckOutcome {
        if street == Street::River && self.can_bet() && self.is_active() {
            self.fold();
            return CheckOutcome::Forfeited { ante: self.wagers.ante, blind: self.wagers.blind };
        }
        CheckOutcome::Checked
    }

    pub fn fold(&mut self) {
        self.status = PlayerStatus::Folded;
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hole.push(card);
    }

    pub fn clear_hand(&mut self) {
        self.hole.clear();
    }

    /// Clear stakes and reactivate the seat for a new hand.
    pub fn reset_wagers(&mut self) {
        self.wagers = Wagers::default();
        self.play_street = None;
        self.status = PlayerStatus::Active;
    }

    pub fn credit(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} (${})", self.position, self.money)
    }
}

/// The house: two hole cards plus the shared community board.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    pub(crate) hole: Vec<Card>,
    pub(crate) community: Board,
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    pub fn community(&self) -> &Board {
        &self.community
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hole.push(card);
    }

    pub fn add_community<I>(&mut self, cards: I) -> Result<(), HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        self.community.extend(cards)
    }

    pub fn reset(&mut self) {
        self.hole.clear();
        self.community.clear();
    }

    /// Dealer hole cards followed by the community cards.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut all = self.hole.clone();
        all.extend_from_slice(self.community.as_slice());
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn street_multipliers() {
        assert_eq!(Street::PreFlop.multiplier(), 4);
        assert_eq!(Street::Flop.multiplier(), 2);
        assert_eq!(Street::River.multiplier(), 1);
    }

    #[test]
    fn ante_and_blind_debit_money() {
        let mut p = Player::new(1, 10);
        p.place_ante(3).unwrap();
        p.place_blind(3).unwrap();
        assert_eq!(p.money(), 4);
        assert_eq!(p.wagers(), Wagers::new(3, 3, 0));
        assert_eq!(p.total_investment(), 6);
        assert_eq!(
            p.place_ante(5),
            Err(WagerError::InsufficientFunds { needed: 5, available: 4 })
        );
    }

    #[test]
    fn play_bet_scales_by_street_and_only_once() {
        let mut p = Player::new(2, 100);
        assert_eq!(p.place_play(5, Street::PreFlop), Ok(20));
        assert_eq!(p.money(), 80);
        assert_eq!(p.play_street(), Some(Street::PreFlop));
        assert_eq!(p.place_play(5, Street::River), Err(WagerError::AlreadyBet));
        assert_eq!(p.money(), 80);
    }

    #[test]
    fn unaffordable_play_bet_leaves_seat_able_to_bet_later() {
        let mut p = Player::new(3, 3);
        assert!(matches!(
            p.place_play(1, Street::PreFlop),
            Err(WagerError::InsufficientFunds { needed: 4, available: 3 })
        ));
        assert!(p.can_bet());
        assert_eq!(p.place_play(1, Street::River), Ok(1));
    }

    #[test]
    fn river_check_without_play_folds() {
        let mut p = Player::new(4, 10);
        p.place_ante(1).unwrap();
        p.place_blind(1).unwrap();
        assert_eq!(p.check(Street::Flop), CheckOutcome::Checked);
        assert!(p.is_active());
        assert_eq!(p.check(Street::River), CheckOutcome::Forfeited { ante: 1, blind: 1 });
        assert!(!p.is_active());
        // No second debit on top of the stakes already taken.
        assert_eq!(p.money(), 8);
    }

    #[test]
    fn river_check_after_play_is_plain_check() {
        let mut p = Player::new(5, 10);
        p.place_play(1, Street::Flop).unwrap();
        assert_eq!(p.check(Street::River), CheckOutcome::Checked);
        assert!(p.is_active());
    }

    #[test]
    fn folded_seat_cannot_wager() {
        let mut p = Player::new(6, 10);
        p.fold();
        assert_eq!(p.place_ante(1), Err(WagerError::Inactive));
        p.reset_wagers();
        assert!(p.is_active());
        assert!(p.place_ante(1).is_ok());
    }

    #[test]
    fn hand_value_counts_ace_as_one() {
        let mut p = Player::new(1, 0);
        for c in parse_cards("Ah Kd").unwrap() {
            p.receive_card(c);
        }
        assert_eq!(p.hand_value(), 14);
        assert!(p.hole_cards().is_ok());
        p.clear_hand();
        assert!(p.hole().is_empty());
    }

    #[test]
    fn dealer_all_cards_is_hole_then_board() {
        let mut d = Dealer::new();
        let cards = parse_cards("2c 3c 4d 5d 6h 7h 8s").unwrap();
        d.receive_card(cards[0]);
        d.receive_card(cards[1]);
        d.add_community(cards[2..].iter().copied()).unwrap();
        assert_eq!(d.all_cards(), cards);
        d.reset();
        assert!(d.all_cards().is_empty());
    }
}
