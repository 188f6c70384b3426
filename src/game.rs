//! The table loop: wagers, deals, betting rounds and showdown for up to six
//! seats against the dealer.

use crate::cards::Card;
use crate::config::{ConfigError, TableConfig};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{best_hand, compare, EvalError, EvaluatedHand};
use crate::hand::{validate_seat, HandError};
use crate::payout::{dealer_qualifies, resolve};
use crate::policy::{DecisionPolicy, PlayerView, SeatSummary};
use crate::report::{ActionKind, ActionRecord, HandReport, SeatResult};
use crate::table::{CheckOutcome, Dealer, Decision, Player, Street, WagerError};
use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("invalid table config: {0}")]
    Config(#[from] ConfigError),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
    #[error("invalid cards: {0}")]
    Hand(#[from] HandError),
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

#[derive(Debug)]
pub struct Game {
    config: TableConfig,
    seed: u64,
    rng: ChaCha8Rng,
    deck: Deck,
    dealer: Dealer,
    players: Vec<Player>,
    hands_played: u64,
}

impl Game {
    pub fn new(config: TableConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        info!("table of {} seats, seed {seed}", config.num_players);
        let players =
            (1..=config.num_players).map(|pos| Player::new(pos, config.starting_money)).collect();
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            config,
            deck: Deck::standard(),
            dealer: Dealer::new(),
            players,
            hands_played: 0,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Seed of the shuffle RNG; replaying it reproduces every hand.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Money currently staked by all seats.
    pub fn pot(&self) -> u64 {
        self.players.iter().map(Player::total_investment).sum()
    }

    pub fn total_money(&self) -> u64 {
        self.players.iter().map(Player::money).sum()
    }

    /// (position, money) per seat.
    pub fn standings(&self) -> Vec<(usize, u64)> {
        self.players.iter().map(|p| (p.position(), p.money())).collect()
    }

    /// Play `iterations` hands in a row.
    pub fn run(
        &mut self,
        iterations: usize,
        policy: &mut dyn DecisionPolicy,
    ) -> Result<Vec<HandReport>, GameError> {
        (0..iterations).map(|_| self.play_hand(policy)).collect()
    }

    /// Play one full hand and settle it.
    pub fn play_hand(
        &mut self,
        policy: &mut dyn DecisionPolicy,
    ) -> Result<HandReport, GameError> {
        self.hands_played += 1;
        let hand_number = self.hands_played;
        info!("hand {hand_number} starting");

        self.deck.reset();
        self.deck.shuffle_with(&mut self.rng);
        self.dealer.reset();
        for p in &mut self.players {
            p.clear_hand();
            p.reset_wagers();
        }

        let sat_out = self.place_initial_wagers();
        let hole_cards = self.deal_hole_cards()?;

        let mut actions = Vec::new();
        for street in Street::ALL {
            match street {
                Street::PreFlop => {}
                Street::Flop => self.deal_community(3)?,
                Street::River => self.deal_community(2)?,
            }
            self.betting_round(street, policy, &mut actions);
        }

        let (dealer_best, qualifies, results) = self.showdown()?;

        Ok(HandReport {
            hand_number,
            sat_out,
            hole_cards,
            dealer_hole: self.dealer.hole().to_vec(),
            community: self.dealer.community().as_slice().to_vec(),
            actions,
            dealer_best,
            dealer_qualifies: qualifies,
            results,
        })
    }

    /// Take ante and blind from every seat; seats that cannot cover both fold
    /// without staking anything.
    fn place_initial_wagers(&mut self) -> Vec<usize> {
        let (ante, blind) = (self.config.ante, self.config.blind);
        let mut sat_out = Vec::new();
        for p in &mut self.players {
            let needed = ante.saturating_add(blind);
            if !p.can_afford(needed) {
                warn!("player {} cannot cover ${needed} ante and blind, folding", p.position());
                p.fold();
                sat_out.push(p.position());
                continue;
            }
            // Affordability was checked for both stakes together.
            let placed = p.place_ante(ante).and_then(|_| p.place_blind(blind));
            if let Err(e) = placed {
                warn!("player {} wager rejected: {e}", p.position());
                p.fold();
                sat_out.push(p.position());
            }
        }
        sat_out
    }

    fn deal_hole_cards(&mut self) -> Result<Vec<(usize, Vec<Card>)>, GameError> {
        let mut dealt = Vec::new();
        for p in self.players.iter_mut().filter(|p| p.is_active()) {
            for card in self.deck.draw_n(2)? {
                p.receive_card(card);
            }
            debug!("player {} dealt {} {}", p.position(), p.hole()[0], p.hole()[1]);
            dealt.push((p.position(), p.hole().to_vec()));
        }
        for card in self.deck.draw_n(2)? {
            self.dealer.receive_card(card);
        }
        Ok(dealt)
    }

    fn deal_community(&mut self, count: usize) -> Result<(), GameError> {
        let cards = self.deck.draw_n(count)?;
        debug!("community +{count}: {cards:?}");
        self.dealer.add_community(cards)?;
        Ok(())
    }

    fn view_for(&self, idx: usize, street: Street) -> PlayerView<'_> {
        let player = &self.players[idx];
        let seats = self
            .players
            .iter()
            .filter(|p| p.position() != player.position())
            .map(|p| SeatSummary {
                position: p.position(),
                money: p.money(),
                wagers: p.wagers(),
                status: p.status(),
                play_street: p.play_street(),
            })
            .collect();
        PlayerView {
            position: player.position(),
            hole: player.hole(),
            community: self.dealer.community().as_slice(),
            street,
            pot: self.pot(),
            money: player.money(),
            can_bet: player.can_bet(),
            seats,
        }
    }

    fn betting_round(
        &mut self,
        street: Street,
        policy: &mut dyn DecisionPolicy,
        actions: &mut Vec<ActionRecord>,
    ) {
        let base = self.config.base_bet;
        for idx in 0..self.players.len() {
            if !self.players[idx].is_active() {
                continue;
            }
            let decision = policy.decide(&self.view_for(idx, street));
            let player = &mut self.players[idx];
            let position = player.position();

            let kind = match decision {
                Decision::Bet => match player.place_play(base, street) {
                    Ok(amount) => ActionKind::Bet(amount),
                    Err(WagerError::AlreadyBet) => ActionKind::AlreadyBet,
                    Err(WagerError::InsufficientFunds { needed, .. }) => {
                        ActionKind::CannotAfford { needed }
                    }
                    Err(_) => continue,
                },
                Decision::Check => ActionKind::Check,
            };

            // Anything short of a placed bet is a check, which folds at the river.
            let kind = match kind {
                ActionKind::Bet(_) => kind,
                _ => match player.check(street) {
                    CheckOutcome::Forfeited { ante, blind } => {
                        ActionKind::Forfeited { ante, blind }
                    }
                    CheckOutcome::Checked => kind,
                },
            };

            debug!("player {position} on {street}: {kind:?}");
            actions.push(ActionRecord { position, street, kind });
        }
    }

    fn showdown(&mut self) -> Result<(EvaluatedHand, bool, Vec<SeatResult>), GameError> {
        let dealer_best = best_hand(&self.dealer.all_cards())?;
        let qualifies = dealer_qualifies(&dealer_best);
        info!(
            "dealer shows {} {}{}",
            dealer_best.category,
            dealer_best.tiebreakers,
            if qualifies { "" } else { ", does not qualify" }
        );

        let board = self.dealer.community();
        let mut results = Vec::new();
        for p in self.players.iter_mut().filter(|p| p.is_active()) {
            let hole = p.hole_cards()?;
            validate_seat(&hole, board)?;
            let best = best_hand(&board.with_hole(&hole))?;
            let outcome = compare(&best, &dealer_best);
            let wagers = p.wagers();
            let payout = resolve(&best, &dealer_best, qualifies, wagers);
            p.credit(payout.total());
            debug!("player {} {} {:?}: {payout}", p.position(), best, outcome);
            results.push(SeatResult {
                position: p.position(),
                hole: p.hole().to_vec(),
                best,
                outcome,
                wagers,
                payout,
                money_after: p.money(),
            });
        }
        Ok((dealer_best, qualifies, results))
    }
}
