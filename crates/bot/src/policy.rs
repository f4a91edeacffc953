// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The betting policy.
//!
//! Decisions branch on the street, the position (the small blind is out of
//! position, the big blind in position), and whether continuing costs
//! chips. Preflop decisions use the range percentile of the hand class,
//! postflop decisions the relative strength against every opponent holding
//! and the board texture. In every branch the first matching rule wins.
use log::{debug, warn};
use rand::Rng;

use pipbot_eval::equity;

use crate::{
    Strategy,
    config::PolicyConfig,
    context::RoundContext,
    hand_key::HandKey,
    preflop,
    round::{Action, ActionKind, BIG_BLIND, LegalActions, RaiseBounds, RoundSnapshot, SMALL_BLIND, Street},
    texture::{BoardFavor, BoardTexture},
};

/// Ratio between the pot and the cost of a call, `None` when the call is
/// free and the odds are infinite.
pub fn pot_odds(pot: u32, cost: u32) -> Option<f64> {
    if cost == 0 {
        None
    } else {
        Some(pot as f64 / cost as f64)
    }
}

/// The share of the pot after a call that the call costs, the equity needed
/// for a break-even call.
pub fn required_equity(pot: u32, cost: u32) -> f64 {
    match pot_odds(pot, cost) {
        Some(odds) => 1.0 / (1.0 + odds),
        None => 0.0,
    }
}

/// The weakest range percentile worth continuing with given the required
/// equity, scaled by `scale`.
pub fn survivable_percentile(required: f64, scale: f64) -> f64 {
    if required <= 0.0 {
        100.0
    } else {
        (100.0 * (1.0 - required) * scale).clamp(0.0, 100.0)
    }
}

/// A poker agent driven by the betting policy.
///
/// Randomness for bet sizes and bluffs comes from the injected `R`, seed it
/// to get reproducible decisions.
#[derive(Debug)]
pub struct Agent<R: Rng> {
    config: PolicyConfig,
    context: RoundContext,
    rng: R,
}

impl<R: Rng> Agent<R> {
    /// Creates an agent with the given configuration and random source.
    pub fn new(config: PolicyConfig, rng: R) -> Self {
        Self {
            config,
            context: RoundContext::default(),
            rng,
        }
    }

    /// The agent configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// The current round context.
    pub fn context(&self) -> &RoundContext {
        &self.context
    }

    fn preflop(&mut self, s: &RoundSnapshot, legal: &LegalActions, bounds: RaiseBounds) -> Action {
        let key = HandKey::from_hole(s.hole);
        let stats = preflop::lookup(key);
        let percentile = stats.percentile;
        let bounty = s.holds_bounty();
        let pot = s.pot();
        let cost = s.continue_cost();

        // Small blind first to act only opens or folds.
        if !s.is_big_blind() && s.my_pip() <= SMALL_BLIND && s.opp_pip() <= BIG_BLIND {
            if percentile <= self.config.open_threshold || bounty {
                let multiplier = self.config.open_multiplier.sample(&mut self.rng);
                if let Some(action) = self.raise(Street::Preflop, pot as f64 * multiplier, legal, bounds) {
                    debug!("Open {key} ({percentile:.2}%) bounty {bounty}: {action}");
                    return action;
                }
            }

            debug!("No open with {key} ({percentile:.2}%)");
            return check_or_fold(legal);
        }

        let required = required_equity(pot, cost);
        let survivable = survivable_percentile(required, self.config.survival_scale);
        let raised = self.context.raises() > 0 || s.opp_pip() > BIG_BLIND;
        let joint = pot_odds(pot, cost).is_none_or(|odds| odds >= self.config.joint_call_odds)
            && percentile <= self.config.joint_call_percentile;

        // Bounty and joint odds hands keep playing against raises.
        if raised && percentile > survivable && !bounty && !joint {
            debug!("Give up {key} ({percentile:.2}% > {survivable:.2}%) against raises");
            return check_or_fold(legal);
        }

        let reraise = self.config.reraise_percentile.sample(&mut self.rng);
        if percentile < reraise {
            let amount = match self.config.raise_multiplier(self.context.raises()) {
                Some(multiplier) => pot as f64 * multiplier,
                None => bounds.max as f64,
            };

            if let Some(action) = self.raise(Street::Preflop, amount, legal, bounds) {
                debug!("Raise {key} ({percentile:.2}% < {reraise:.2}%): {action}");
                return action;
            }
        }

        if legal.contains(ActionKind::Call) {
            if bounty || joint || percentile <= survivable {
                debug!("Call {key} ({percentile:.2}%) survivable {survivable:.2}% bounty {bounty}");
                return Action::Call;
            }
        }

        check_or_fold(legal)
    }

    fn flop(
        &mut self,
        s: &RoundSnapshot,
        legal: &LegalActions,
        bounds: RaiseBounds,
        strength: f64,
        texture: &BoardTexture,
    ) -> Action {
        let pot = s.pot() as f64;

        let cbet_strength = match texture.favor {
            BoardFavor::Aggressor => self.config.cbet_strength - self.config.texture_adjust,
            BoardFavor::Caller => self.config.cbet_strength + self.config.texture_adjust,
            BoardFavor::Neutral => self.config.cbet_strength,
        };

        if self.context.is_preflop_aggressor() && strength > cbet_strength {
            let ratio = self.config.cbet_ratio.sample(&mut self.rng);
            if let Some(action) = self.raise(Street::Flop, pot * ratio, legal, bounds) {
                debug!("Continuation bet {strength:.3} on {:?}: {action}", texture.shape);
                return action;
            }
        }

        if s.is_big_blind() && strength > self.config.probe_strength {
            let ratio = self.config.probe_ratio.sample(&mut self.rng);
            if let Some(action) = self.raise(Street::Flop, pot * ratio, legal, bounds) {
                debug!("In position bet {strength:.3}: {action}");
                return action;
            }
        }

        if legal.contains(ActionKind::Check) {
            return Action::Check;
        }

        if strength >= self.config.flop_call_strength && legal.contains(ActionKind::Call) {
            return Action::Call;
        }

        Action::Fold
    }

    fn turn(&mut self, s: &RoundSnapshot, legal: &LegalActions, bounds: RaiseBounds, strength: f64) -> Action {
        let pot = s.pot();
        let cost = s.continue_cost();

        if strength > self.config.turn_raise_strength {
            let ratio = if cost == 0 {
                self.config.turn_bet_ratio
            } else {
                self.config.turn_raise_ratio
            };

            // Raise only small bets, call the bigger ones.
            if (cost as f64) < pot as f64 / 3.0 {
                if let Some(action) = self.raise(Street::Turn, pot as f64 * ratio, legal, bounds) {
                    debug!("Turn raise {strength:.3} against {cost}: {action}");
                    return action;
                }
            }
        }

        if cost > 0 && strength >= self.config.turn_call_strength && legal.contains(ActionKind::Call) {
            return Action::Call;
        }

        self.fallback(pot, cost, legal)
    }

    fn river(
        &mut self,
        s: &RoundSnapshot,
        legal: &LegalActions,
        bounds: RaiseBounds,
        strength: f64,
        texture: &BoardTexture,
    ) -> Action {
        let pot = s.pot();
        let cost = s.continue_cost();
        let bets = self.context.street_raises() + u32::from(cost > 0);

        if let Some(tier) = self.config.river_tier(bets) {
            if strength > tier.strength {
                let amount = pot as f64 * tier.pot_ratio;
                if let Some(action) = self.raise(Street::River, amount, legal, bounds) {
                    debug!("River value {strength:.3} after {bets} bets: {action}");
                    return action;
                }
            }
        }

        if bets == 0
            && strength <= self.config.bluff_strength
            && texture.favor == BoardFavor::Aggressor
            && self.rng.random::<f64>() < self.config.bluff_frequency
        {
            let amount = pot as f64 * self.config.bluff_ratio;
            if let Some(action) = self.raise(Street::River, amount, legal, bounds) {
                debug!("River bluff {strength:.3}: {action}");
                return action;
            }
        }

        if cost > 0 && strength >= required_equity(pot, cost) && legal.contains(ActionKind::Call) {
            return Action::Call;
        }

        check_or_fold(legal)
    }

    /// Check if possible, call a cheap enough bet, or fold.
    fn fallback(&self, pot: u32, cost: u32, legal: &LegalActions) -> Action {
        if legal.contains(ActionKind::Check) {
            return Action::Check;
        }

        let odds = pot_odds(pot, cost);
        if legal.contains(ActionKind::Call)
            && odds.is_none_or(|odds| odds >= self.config.fallback_call_odds)
        {
            return Action::Call;
        }

        Action::Fold
    }

    /// Returns a raise clamped to the bounds and records it, `None` if
    /// raising is not possible.
    fn raise(
        &mut self,
        street: Street,
        amount: f64,
        legal: &LegalActions,
        bounds: RaiseBounds,
    ) -> Option<Action> {
        if !legal.contains(ActionKind::Raise) {
            return None;
        }

        let amount = bounds.clamp(amount)?;
        self.context.record_raise(street);
        Some(Action::Raise(amount))
    }
}

impl<R: Rng> Strategy for Agent<R> {
    fn on_round_start(&mut self) {
        debug!("New round, context reset");
        self.context.reset();
    }

    fn decide(&mut self, s: &RoundSnapshot, legal: &LegalActions, bounds: RaiseBounds) -> Action {
        self.context.observe(s.street);

        let action = match s.street {
            Street::Preflop => self.preflop(s, legal, bounds),
            _ if s.board.len() < 3 => {
                warn!("{} with {} board cards", s.street, s.board.len());
                check_or_fold(legal)
            }
            street => {
                let board = &s.board[..s.board.len().min(5)];
                let equity = equity::estimate(s.hole, board);
                let texture = BoardTexture::classify(board);
                let bounty = s.bounty_in_play();
                let strength = self.config.bounty_strength(equity.relative_strength, bounty);

                debug!(
                    "{street} {}{} {:?}: strength {strength:.3} bounty {bounty} {} {:?}/{:?} pot {} cost {}",
                    s.hole[0],
                    s.hole[1],
                    board,
                    equity.category,
                    texture.shape,
                    texture.favor,
                    s.pot(),
                    s.continue_cost()
                );

                match street {
                    Street::Flop => self.flop(s, legal, bounds, strength, &texture),
                    Street::Turn => self.turn(s, legal, bounds, strength),
                    _ => self.river(s, legal, bounds, strength, &texture),
                }
            }
        };

        ensure_legal(action, legal, bounds)
    }
}

fn check_or_fold(legal: &LegalActions) -> Action {
    if legal.contains(ActionKind::Check) {
        Action::Check
    } else {
        Action::Fold
    }
}

/// Maps an action the engine would reject to the closest legal one.
///
/// Falls back to check, fold, call, and a minimum raise in this order. Fold
/// is the last resort default when none of them is available, as for a set
/// with only raise and degenerate bounds.
fn ensure_legal(action: Action, legal: &LegalActions, bounds: RaiseBounds) -> Action {
    let valid = match action {
        Action::Raise(amount) => {
            legal.contains(ActionKind::Raise) && bounds.is_valid() && (bounds.min..=bounds.max).contains(&amount)
        }
        _ => legal.contains(action.kind()),
    };

    if valid {
        return action;
    }

    warn!("Action {action} not legal");
    if legal.contains(ActionKind::Check) {
        Action::Check
    } else if legal.contains(ActionKind::Fold) {
        Action::Fold
    } else if legal.contains(ActionKind::Call) {
        Action::Call
    } else if legal.contains(ActionKind::Raise) && bounds.is_valid() {
        Action::Raise(bounds.min)
    } else {
        Action::Fold
    }
}
