// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pipbot, a heads-up bounty poker agent.
//!
//! The engine hands the agent a [RoundSnapshot] with the legal actions and
//! the raise bounds, the agent returns one [Action]:
//!
//! ```
//! use pipbot_bot::{Agent, PolicyConfig, RoundSnapshot, Strategy, eval::parse_cards};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut agent = Agent::new(PolicyConfig::default(), StdRng::seed_from_u64(1));
//! agent.on_round_start();
//!
//! let hole = parse_cards("7c2d").unwrap();
//! let snapshot = RoundSnapshot::new(0, [hole[0], hole[1]], vec![], [399, 398], [1, 2]);
//! let action = agent.decide(&snapshot, &snapshot.legal_actions(), snapshot.raise_bounds());
//! assert_eq!(action.to_string(), "fold");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub mod context;
pub mod hand_key;
pub mod policy;
pub mod preflop;
pub mod round;
pub mod texture;

pub use config::{Jitter, PolicyConfig, RiverTier};
pub use context::RoundContext;
pub use hand_key::{HandKey, HandKind, ParseHandKeyError};
pub use policy::Agent;
pub use preflop::PreflopStats;
pub use round::{Action, ActionKind, LegalActions, RaiseBounds, RoundSnapshot, Street};
pub use texture::{BoardFavor, BoardShape, BoardTexture};

pub use pipbot_eval as eval;

/// A poker bot strategy.
pub trait Strategy {
    /// Called before the first decision of each round.
    fn on_round_start(&mut self);

    /// Chooses an action for the acting player.
    ///
    /// The returned action must be one of the `legal` actions, a raise amount
    /// must be within `bounds`.
    fn decide(&mut self, snapshot: &RoundSnapshot, legal: &LegalActions, bounds: RaiseBounds) -> Action;
}
