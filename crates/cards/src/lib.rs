// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pipbot playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use pipbot_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kh: Card = "Kh".parse().unwrap();
//! assert_eq!(ah.suit(), kh.suit());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating the k-cards
//! combinations left in the deck, for example to iterate all the two cards
//! hands an opponent may hold after the flop:
//!
//! ```
//! # use pipbot_cards::{parse_cards, Deck};
//! let seen = parse_cards("AhKh 2c7d9s").unwrap();
//! let mut deck = Deck::default();
//! deck.remove_all(&seen);
//!
//! let mut counter = 0;
//! deck.for_each(2, |_hand| counter += 1);
//! assert_eq!(counter, 1_081);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, ParseCardError, Rank, Suit, parse_cards};
