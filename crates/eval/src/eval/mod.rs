// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Evaluates 5, 6, and 7 cards poker hands using rank and suit bitmasks:
//! a flush is found from the per suit masks, pairs, trips and quads from the
//! rank counts, and straights by and-ing shifted copies of the ranks mask.
//!
//! [HandValue::eval] returns the value of the best five cards hand without
//! extracting the cards, useful for computing odds and other stats. The
//! [HandRank] category is derived from the value with a fixed mapping,
//! `0` for high card up to `8` for a straight flush.

#[allow(clippy::module_inception)]
pub mod eval;
pub use eval::{HandRank, HandValue};
