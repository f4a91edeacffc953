// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pipbot hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands and an exact equity
//! estimator that ranks a hand against every opponent holding.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the hand
//! and get its rank:
//!
//! ```
//! # use pipbot_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]);
//! let v2 = HandValue::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! and [equity::estimate] to get the fraction of opponent holdings a hand
//! does not lose to:
//!
//! ```
//! # use pipbot_eval::*;
//! let hole = parse_cards("JhTh").unwrap();
//! let board = parse_cards("AhKhQh").unwrap();
//! let res = equity::estimate([hole[0], hole[1]], &board);
//! assert_eq!(res.relative_strength, 1.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub mod eval;
pub use equity::EquityResult;
pub use eval::{HandRank, HandValue};

// Reexport cards types.
pub use pipbot_cards::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
