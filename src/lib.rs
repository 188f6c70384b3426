//! uth-rs: Ultimate Texas Hold'em hand evaluation and payout engine
//!
//! Goals:
//! - Exact five-card category and tiebreaker rules, best-of-n selection
//! - Ante / blind / play settlement against a dealer that must qualify
//! - Reproducible table simulation from a single seed
//!
//! ## Quick start: best hand from seven cards
//! ```
//! use uth_rs::cards::parse_cards;
//! use uth_rs::evaluator::{best_hand, Category};
//!
//! let cards = parse_cards("As Ah Kc Qd Jh 3s 2c").unwrap();
//! let best = best_hand(&cards).unwrap();
//! assert_eq!(best.category, Category::Pair);
//! assert_eq!(best.tiebreakers.as_slice(), &[14, 13, 12, 11]);
//! ```
//!
//! ## Settling a seat
//! ```
//! use uth_rs::cards::parse_cards;
//! use uth_rs::evaluator::best_hand;
//! use uth_rs::payout::{dealer_qualifies, resolve, Wagers};
//!
//! let player = best_hand(&parse_cards("9h 9d 9c 4s 4d Kc 2h").unwrap()).unwrap();
//! let dealer = best_hand(&parse_cards("Ah Kd Qs 7c 5h 3d 2s").unwrap()).unwrap();
//! assert!(!dealer_qualifies(&dealer));
//!
//! let payout = resolve(&player, &dealer, false, Wagers::new(10, 10, 40));
//! // Ante pushes, blind pays 3:1 on a full house, play pays even money.
//! assert_eq!((payout.ante, payout.blind, payout.play), (10, 40, 80));
//! ```
//!
//! ## Simulation
//! ```sh
//! cargo run --bin uth-rs -- --players 6 --hands 10 --seed 7
//! cargo run --bin uth-rs -- --tui
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod payout;
pub mod policy;
pub mod report;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
