// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Per round betting history.
use crate::round::Street;

/// Counters the policy keeps for the round in progress.
///
/// Reset when a new round starts, updated only when the policy raises.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RoundContext {
    raises: u32,
    street: Street,
    street_raises: u32,
    preflop_aggressor: bool,
}

impl RoundContext {
    /// Clears all the counters for a new round.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves to the given street, the street counter restarts when the
    /// street changes.
    pub fn observe(&mut self, street: Street) {
        if street != self.street {
            self.street = street;
            self.street_raises = 0;
        }
    }

    /// Records a raise on the given street.
    pub fn record_raise(&mut self, street: Street) {
        self.observe(street);
        self.raises += 1;
        self.street_raises += 1;

        if street == Street::Preflop {
            self.preflop_aggressor = true;
        }
    }

    /// Number of raises this round.
    pub fn raises(&self) -> u32 {
        self.raises
    }

    /// Number of raises on the current street.
    pub fn street_raises(&self) -> u32 {
        self.street_raises
    }

    /// The street of the last decision.
    pub fn street(&self) -> Street {
        self.street
    }

    /// Checks if this player made the last preflop raise.
    pub fn is_preflop_aggressor(&self) -> bool {
        self.preflop_aggressor
    }
}
