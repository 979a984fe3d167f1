//! poker-hands: five-card poker hand ranking
//!
//! - [`evaluator::evaluate`] maps a hand to a totally ordered [`evaluator::HandRank`]
//! - [`showdown::select_winners`] returns every hand that ranks highest, ties included
//! - [`deck`] and [`stats`] deal random hands and tally category frequencies
//!
//! Invalid input is rejected when cards and hands are built, so ranking itself
//! cannot fail.
//!
//! ## Quick start
//! ```
//! use poker_hands::evaluator::{evaluate, Category};
//! use poker_hands::hand::Hand;
//! use poker_hands::showdown::select_winners;
//!
//! let sf: Hand = "6C 7C 8C 9C TC".parse().unwrap();
//! let fk: Hand = "9D 9H 9S 9C 7D".parse().unwrap();
//! let fh: Hand = "TD TC TH 7C 7D".parse().unwrap();
//!
//! assert_eq!(evaluate(&fk).category(), Category::FourOfAKind);
//! assert_eq!(select_winners(&[sf, fk, fh]).unwrap(), vec![sf]);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-hands -- winners "6C 7C 8C 9C TC" "9D 9H 9S 9C 7D"
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod showdown;
pub mod stats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
