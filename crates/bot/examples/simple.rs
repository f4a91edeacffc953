// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Plays random decisions with a simple strategy and the policy agent.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use rand::{Rng, SeedableRng, rngs::StdRng};

use pipbot_bot::{
    Action, ActionKind, Agent, LegalActions, PolicyConfig, RaiseBounds, RoundSnapshot, Strategy,
    eval::Deck,
};

#[derive(Clone)]
struct AlwaysCallOrCheck;

impl Strategy for AlwaysCallOrCheck {
    fn on_round_start(&mut self) {}

    fn decide(&mut self, _snapshot: &RoundSnapshot, legal: &LegalActions, _bounds: RaiseBounds) -> Action {
        if legal.contains(ActionKind::Call) {
            Action::Call
        } else if legal.contains(ActionKind::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

#[derive(Debug, Parser)]
struct Cli {
    /// Number of snapshots to play.
    #[clap(long, short, default_value_t = 10)]
    deals: usize,
    /// Random seed.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = StdRng::seed_from_u64(cli.seed);

    let mut simple = AlwaysCallOrCheck;
    let mut agent = Agent::new(PolicyConfig::default(), StdRng::seed_from_u64(cli.seed));

    for _ in 0..cli.deals {
        let mut deck = Deck::new_and_shuffled(&mut rng);
        let (Some(c1), Some(c2)) = (deck.deal(), deck.deal()) else {
            break;
        };

        let board_len = [0, 3, 4, 5][rng.random_range(0..4)];
        let board = (0..board_len).filter_map(|_| deck.deal()).collect::<Vec<_>>();

        let active = rng.random_range(0..2);
        let my_pip = rng.random_range(0..20);
        let opp_pip = rng.random_range(0..40);
        let mut pips = [0; 2];
        pips[active] = my_pip;
        pips[1 - active] = opp_pip;
        let stacks = [400 - pips[0] - 20, 400 - pips[1] - 20];

        let snapshot = RoundSnapshot::new(active, [c1, c2], board, stacks, pips);
        let legal = snapshot.legal_actions();
        let bounds = snapshot.raise_bounds();

        simple.on_round_start();
        agent.on_round_start();

        let board = snapshot
            .board
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "{c1}{c2} [{board}] pot {} cost {}: simple {}, agent {}",
            snapshot.pot(),
            snapshot.continue_cost(),
            simple.decide(&snapshot, &legal, bounds),
            agent.decide(&snapshot, &legal, bounds),
        );
    }
}
