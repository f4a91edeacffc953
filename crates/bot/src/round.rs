// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round state snapshot and action types exchanged with the match engine.
use serde::{Deserialize, Serialize};
use std::fmt;

use pipbot_eval::{Card, Rank};

use crate::hand_key::HandKey;

/// The small blind amount.
pub const SMALL_BLIND: u32 = 1;
/// The big blind amount.
pub const BIG_BLIND: u32 = 2;
/// The players stack at the start of each round.
pub const STARTING_STACK: u32 = 400;

/// A betting round phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Street {
    /// No board cards.
    #[default]
    Preflop,
    /// Three board cards.
    Flop,
    /// Four board cards.
    Turn,
    /// Five board cards.
    River,
}

impl Street {
    /// The street for a number of board cards, less than 3 cards is preflop.
    pub fn from_board_len(len: usize) -> Street {
        match len {
            0..=2 => Street::Preflop,
            3 => Street::Flop,
            4 => Street::Turn,
            _ => Street::River,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{name}")
    }
}

/// The kind of an action without its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Fold.
    Fold,
    /// Check.
    Check,
    /// Call.
    Call,
    /// Bet or raise.
    Raise,
}

impl ActionKind {
    fn bit(&self) -> u8 {
        match self {
            ActionKind::Fold => 0x1,
            ActionKind::Check => 0x2,
            ActionKind::Call => 0x4,
            ActionKind::Raise => 0x8,
        }
    }
}

/// A player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Fold the hand.
    Fold,
    /// Check.
    Check,
    /// Call the opponent bet.
    Call,
    /// Bet or raise so that this street pip becomes the given amount.
    Raise(u32),
}

impl Action {
    /// Returns this action kind.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Fold => write!(f, "fold"),
            Action::Check => write!(f, "check"),
            Action::Call => write!(f, "call"),
            Action::Raise(amount) => write!(f, "raise {amount}"),
        }
    }
}

/// The set of actions the engine accepts for a decision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalActions(u8);

impl LegalActions {
    /// Creates a set with the given actions.
    pub fn new(kinds: &[ActionKind]) -> Self {
        kinds.iter().copied().collect()
    }

    /// Adds an action to the set.
    pub fn insert(&mut self, kind: ActionKind) {
        self.0 |= kind.bit();
    }

    /// Checks if an action is in the set.
    pub fn contains(&self, kind: ActionKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<ActionKind> for LegalActions {
    fn from_iter<T: IntoIterator<Item = ActionKind>>(iter: T) -> Self {
        let mut legal = LegalActions::default();
        iter.into_iter().for_each(|k| legal.insert(k));
        legal
    }
}

/// The smallest and largest amounts for a legal raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaiseBounds {
    /// Minimum raise amount.
    pub min: u32,
    /// Maximum raise amount.
    pub max: u32,
}

impl RaiseBounds {
    /// Creates new bounds.
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Checks if the bounds allow at least one raise amount.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Truncates an amount and clamps it to the bounds, returns `None` for
    /// degenerate bounds.
    pub fn clamp(&self, amount: f64) -> Option<u32> {
        if !self.is_valid() {
            return None;
        }

        // Saturating float to int cast, NaN becomes 0.
        let amount = amount.max(0.0) as u32;
        Some(amount.clamp(self.min, self.max))
    }
}

/// An immutable snapshot of the round state for the acting player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// The current street.
    pub street: Street,
    /// The acting player index, 0 is the small blind and 1 the big blind.
    pub active: usize,
    /// The acting player hole cards.
    pub hole: [Card; 2],
    /// The board cards dealt so far.
    pub board: Vec<Card>,
    /// Chips left to each player.
    pub stacks: [u32; 2],
    /// Chips each player put in the pot on this street.
    pub pips: [u32; 2],
    /// The acting player bounty rank.
    pub bounty: Option<Rank>,
    /// The stack each player started the round with.
    pub starting_stack: u32,
}

impl RoundSnapshot {
    /// Creates a snapshot for the `active` player, the street is derived from
    /// the number of board cards.
    pub fn new(
        active: usize,
        hole: [Card; 2],
        board: Vec<Card>,
        stacks: [u32; 2],
        pips: [u32; 2],
    ) -> Self {
        Self {
            street: Street::from_board_len(board.len()),
            active: active & 1,
            hole,
            board,
            stacks,
            pips,
            bounty: None,
            starting_stack: STARTING_STACK,
        }
    }

    /// Sets the bounty rank.
    pub fn with_bounty(mut self, bounty: Rank) -> Self {
        self.bounty = Some(bounty);
        self
    }

    /// Sets the round starting stack.
    pub fn with_starting_stack(mut self, starting_stack: u32) -> Self {
        self.starting_stack = starting_stack;
        self
    }

    /// Checks if the acting player is the big blind.
    pub fn is_big_blind(&self) -> bool {
        self.active == 1
    }

    /// The acting player pip.
    pub fn my_pip(&self) -> u32 {
        self.pips[self.active]
    }

    /// The opponent pip.
    pub fn opp_pip(&self) -> u32 {
        self.pips[1 - self.active]
    }

    /// The acting player stack.
    pub fn my_stack(&self) -> u32 {
        self.stacks[self.active]
    }

    /// The opponent stack.
    pub fn opp_stack(&self) -> u32 {
        self.stacks[1 - self.active]
    }

    /// The chips needed to stay in the pot.
    pub fn continue_cost(&self) -> u32 {
        self.opp_pip().saturating_sub(self.my_pip())
    }

    /// Chips a player put in the pot this round.
    pub fn contribution(&self, player: usize) -> u32 {
        self.starting_stack.saturating_sub(self.stacks[player & 1])
    }

    /// The total pot including this street pips.
    pub fn pot(&self) -> u32 {
        self.contribution(0) + self.contribution(1)
    }

    /// Checks if the hole cards contain the bounty rank.
    pub fn holds_bounty(&self) -> bool {
        self.bounty
            .is_some_and(|b| HandKey::from_hole(self.hole).has_rank(b))
    }

    /// Checks if the bounty rank is in the hole or on the board.
    pub fn bounty_in_play(&self) -> bool {
        self.holds_bounty()
            || self
                .bounty
                .is_some_and(|b| self.board.iter().any(|c| c.rank() == b))
    }

    /// The actions allowed by the standard heads-up rules.
    ///
    /// Checking is allowed when there is nothing to call, folding only when
    /// facing a bet, and raising when both players have chips behind and the
    /// call does not put the acting player all-in.
    pub fn legal_actions(&self) -> LegalActions {
        let cost = self.continue_cost();
        if cost == 0 {
            if self.stacks[0] == 0 || self.stacks[1] == 0 {
                LegalActions::new(&[ActionKind::Check])
            } else {
                LegalActions::new(&[ActionKind::Check, ActionKind::Raise])
            }
        } else if cost >= self.my_stack() || self.opp_stack() == 0 {
            LegalActions::new(&[ActionKind::Fold, ActionKind::Call])
        } else {
            LegalActions::new(&[ActionKind::Fold, ActionKind::Call, ActionKind::Raise])
        }
    }

    /// The raise bounds allowed by the standard heads-up rules.
    ///
    /// A raise must add at least the call plus the larger of the call and the
    /// big blind, and at most what the opponent can match.
    pub fn raise_bounds(&self) -> RaiseBounds {
        let cost = self.continue_cost();
        let max_contribution = self.my_stack().min(self.opp_stack() + cost);
        let min_contribution = max_contribution.min(cost + cost.max(BIG_BLIND));
        RaiseBounds::new(
            self.my_pip() + min_contribution,
            self.my_pip() + max_contribution,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipbot_eval::parse_cards;

    fn hole(s: &str) -> [Card; 2] {
        let cards = parse_cards(s).unwrap();
        [cards[0], cards[1]]
    }

    #[test]
    fn street_from_board() {
        assert_eq!(Street::from_board_len(0), Street::Preflop);
        assert_eq!(Street::from_board_len(3), Street::Flop);
        assert_eq!(Street::from_board_len(4), Street::Turn);
        assert_eq!(Street::from_board_len(5), Street::River);
    }

    #[test]
    fn legal_actions_set() {
        let legal = LegalActions::new(&[ActionKind::Check, ActionKind::Raise]);
        assert!(legal.contains(ActionKind::Check));
        assert!(legal.contains(ActionKind::Raise));
        assert!(!legal.contains(ActionKind::Fold));
        assert!(!legal.contains(ActionKind::Call));
        assert!(LegalActions::default().is_empty());
    }

    #[test]
    fn raise_bounds_clamp() {
        let bounds = RaiseBounds::new(4, 400);
        assert_eq!(bounds.clamp(7.9), Some(7));
        assert_eq!(bounds.clamp(1.0), Some(4));
        assert_eq!(bounds.clamp(1e9), Some(400));
        assert_eq!(bounds.clamp(f64::NAN), Some(4));
        assert_eq!(RaiseBounds::new(10, 5).clamp(7.0), None);
    }

    #[test]
    fn small_blind_opening_spot() {
        let s = RoundSnapshot::new(0, hole("AhKh"), vec![], [399, 398], [1, 2]);
        assert_eq!(s.street, Street::Preflop);
        assert_eq!(s.pot(), 3);
        assert_eq!(s.continue_cost(), 1);
        assert_eq!(s.raise_bounds(), RaiseBounds::new(4, 400));

        let legal = s.legal_actions();
        assert!(legal.contains(ActionKind::Fold));
        assert!(legal.contains(ActionKind::Call));
        assert!(legal.contains(ActionKind::Raise));
        assert!(!legal.contains(ActionKind::Check));
    }

    #[test]
    fn big_blind_facing_limp() {
        let s = RoundSnapshot::new(1, hole("7c2d"), vec![], [398, 398], [2, 2]);
        assert!(s.is_big_blind());
        assert_eq!(s.continue_cost(), 0);
        assert_eq!(s.raise_bounds(), RaiseBounds::new(4, 400));

        let legal = s.legal_actions();
        assert!(legal.contains(ActionKind::Check));
        assert!(!legal.contains(ActionKind::Fold));
    }

    #[test]
    fn all_in_call_only() {
        let board = parse_cards("2c7d9s").unwrap();
        let s = RoundSnapshot::new(0, hole("AhKh"), board, [50, 0], [0, 150]);
        let legal = s.legal_actions();
        assert!(legal.contains(ActionKind::Call));
        assert!(!legal.contains(ActionKind::Raise));
    }

    #[test]
    fn bounty_in_hole() {
        let s = RoundSnapshot::new(0, hole("AhKh"), vec![], [399, 398], [1, 2]);
        assert!(!s.holds_bounty());
        assert!(s.clone().with_bounty(Rank::King).holds_bounty());
        assert!(!s.with_bounty(Rank::Deuce).holds_bounty());
    }

    #[test]
    fn bounty_on_board() {
        let board = parse_cards("Qh9s7c").unwrap();
        let s = RoundSnapshot::new(1, hole("Jc8d"), board, [390, 390], [0, 0]);
        assert!(!s.bounty_in_play());

        let s = s.with_bounty(Rank::Queen);
        assert!(!s.holds_bounty());
        assert!(s.bounty_in_play());

        let s = s.with_bounty(Rank::Jack);
        assert!(s.holds_bounty());
        assert!(s.bounty_in_play());

        assert!(!s.with_bounty(Rank::Ace).bounty_in_play());
    }

    #[test]
    fn pot_from_starting_stack() {
        let s = RoundSnapshot::new(0, hole("AhKh"), vec![], [199, 198], [1, 2]);
        assert_eq!(s.pot(), 3 + 2 * (STARTING_STACK - 200));

        let s = s.with_starting_stack(200);
        assert_eq!(s.pot(), 3);
        assert_eq!(s.contribution(0), 1);
        assert_eq!(s.contribution(1), 2);
    }
}
