// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Betting policy tuning constants.
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A range a value is drawn uniformly from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    /// Lowest value.
    pub low: f64,
    /// Highest value.
    pub high: f64,
}

impl Jitter {
    /// Creates a new range.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Draws a value in `[low, high]`, returns `low` for an empty range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.low < self.high {
            rng.random_range(self.low..=self.high)
        } else {
            self.low
        }
    }
}

/// A river value bet level used after a number of bets on the street.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiverTier {
    /// Minimum relative strength to raise.
    pub strength: f64,
    /// Raise size as a fraction of the pot.
    pub pot_ratio: f64,
}

/// Policy configuration.
///
/// The default is the reference tuning, [PolicyConfig::tight] and
/// [PolicyConfig::loose] are variants with a narrower and wider small blind
/// opening range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Small blind opens hands at or below this range percentile.
    pub open_threshold: f64,
    /// Open raise size as a multiple of the pot.
    pub open_multiplier: Jitter,
    /// Preflop re-raise with hands below a percentile drawn from this range.
    pub reraise_percentile: Jitter,
    /// Preflop raise size as a multiple of the pot by number of prior raises,
    /// past the end of the schedule raises are all-in.
    pub raise_schedule: Vec<f64>,
    /// Scales the pot odds survivable percentile.
    pub survival_scale: f64,
    /// Preflop call when pot odds are at least this good...
    pub joint_call_odds: f64,
    /// ...and the hand percentile is at or below this.
    pub joint_call_percentile: f64,

    /// Postflop strength multiplier when the bounty rank is in the hole or
    /// on the board, the result is capped at 1.
    pub bounty_boost: f64,

    /// Preflop aggressor continuation bet strength.
    pub cbet_strength: f64,
    /// Continuation bet size as a fraction of the pot.
    pub cbet_ratio: Jitter,
    /// Continuation bet strength adjustment for boards that favor one range.
    pub texture_adjust: f64,
    /// In position flop bet strength.
    pub probe_strength: f64,
    /// In position flop bet size as a fraction of the pot.
    pub probe_ratio: Jitter,
    /// Flop call strength.
    pub flop_call_strength: f64,

    /// Turn raise or bet strength.
    pub turn_raise_strength: f64,
    /// Turn raise size against a small bet as a fraction of the pot.
    pub turn_raise_ratio: f64,
    /// Turn bet size as a fraction of the pot.
    pub turn_bet_ratio: f64,
    /// Turn call strength.
    pub turn_call_strength: f64,
    /// Call without strength when the pot odds are at least this good.
    pub fallback_call_odds: f64,

    /// River value raises by number of bets on the street.
    pub river_tiers: Vec<RiverTier>,
    /// River bluffs with hands at or below this strength.
    pub bluff_strength: f64,
    /// Probability of bluffing when the bluff conditions hold.
    pub bluff_frequency: f64,
    /// Bluff size as a fraction of the pot.
    pub bluff_ratio: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            open_threshold: 86.0,
            open_multiplier: Jitter::new(2.0, 2.5),
            reraise_percentile: Jitter::new(10.0, 20.0),
            raise_schedule: vec![2.0, 2.2, 2.3, 2.4],
            survival_scale: 0.6,
            joint_call_odds: 2.5,
            joint_call_percentile: 50.0,

            bounty_boost: 1.5,

            cbet_strength: 0.80,
            cbet_ratio: Jitter::new(0.66, 0.75),
            texture_adjust: 0.05,
            probe_strength: 0.70,
            probe_ratio: Jitter::new(0.33, 0.50),
            flop_call_strength: 0.55,

            turn_raise_strength: 0.85,
            turn_raise_ratio: 0.75,
            turn_bet_ratio: 0.66,
            turn_call_strength: 0.60,
            fallback_call_odds: 3.0,

            river_tiers: vec![
                RiverTier {
                    strength: 0.93,
                    pot_ratio: 0.75,
                },
                RiverTier {
                    strength: 0.95,
                    pot_ratio: 1.0,
                },
                RiverTier {
                    strength: 0.98,
                    pot_ratio: 1.0,
                },
            ],
            bluff_strength: 0.15,
            bluff_frequency: 0.25,
            bluff_ratio: 0.75,
        }
    }
}

impl PolicyConfig {
    /// Narrow opening range with a 4:1 fallback call.
    pub fn tight() -> Self {
        Self {
            open_threshold: 83.0,
            fallback_call_odds: 4.0,
            ..Self::default()
        }
    }

    /// Wide opening range with a steeper raise schedule.
    pub fn loose() -> Self {
        Self {
            open_threshold: 88.0,
            raise_schedule: vec![2.0, 2.25, 2.5, 2.75],
            ..Self::default()
        }
    }

    /// Preflop raise size multiplier after `raises` prior raises, `None`
    /// means all-in.
    pub fn raise_multiplier(&self, raises: u32) -> Option<f64> {
        self.raise_schedule.get(raises as usize).copied()
    }

    /// Postflop strength adjusted for the bounty, in `[0, 1]`.
    pub fn bounty_strength(&self, strength: f64, bounty: bool) -> f64 {
        if bounty {
            (strength * self.bounty_boost).clamp(0.0, 1.0)
        } else {
            strength
        }
    }

    /// River tier after `bets` bets on the street, the last tier applies to
    /// any larger count.
    pub fn river_tier(&self, bets: u32) -> Option<RiverTier> {
        let idx = (bets as usize).min(self.river_tiers.len().saturating_sub(1));
        self.river_tiers.get(idx).copied()
    }
}
