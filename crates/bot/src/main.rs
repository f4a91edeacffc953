// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pipbot decision runner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use ahash::AHashSet;
use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

use pipbot_bot::{
    Agent, PolicyConfig, RoundSnapshot, Strategy,
    eval::{Card, Rank, parse_cards},
};

/// Policy tuning presets.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    /// Opening threshold 86.
    Default,
    /// Opening threshold 83.
    Tight,
    /// Opening threshold 88.
    Loose,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The acting player hole cards (eg. AhKh).
    #[clap(long)]
    hole: String,
    /// The board cards (eg. "Qh Jh Th").
    #[clap(long, default_value = "")]
    board: String,
    /// Chips each player put in the pot on this street.
    #[clap(long, value_parser = parse_pair, default_value = "1,2")]
    pips: [u32; 2],
    /// Chips left to each player.
    #[clap(long, value_parser = parse_pair, default_value = "399,398")]
    stacks: [u32; 2],
    /// The acting player, 0 is the small blind and 1 the big blind.
    #[clap(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    active: u8,
    /// The stack each player started the round with.
    #[clap(long, default_value_t = pipbot_bot::round::STARTING_STACK)]
    starting_stack: u32,
    /// The bounty rank (eg. A).
    #[clap(long)]
    bounty: Option<Rank>,
    /// Random seed for bet sizes and bluffs.
    #[clap(long)]
    seed: Option<u64>,
    /// Policy preset.
    #[clap(long, value_enum, default_value_t = Preset::Default)]
    preset: Preset,
    /// Small blind opening range percentile.
    #[clap(long)]
    open_threshold: Option<f64>,
    /// Log policy decisions.
    #[clap(long, short)]
    verbose: bool,
}

fn parse_pair(s: &str) -> Result<[u32; 2], String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<u32>().map_err(|e| format!("{v}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        [a, b] => Ok([*a, *b]),
        _ => Err(format!("expected two comma separated values, got '{s}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let hole = match parse_cards(&cli.hole)?.as_slice() {
        [c1, c2] => [*c1, *c2],
        cards => bail!("Expected 2 hole cards, got {}", cards.len()),
    };

    let board = parse_cards(&cli.board)?;
    if !matches!(board.len(), 0 | 3..=5) {
        bail!("Expected 0, 3, 4, or 5 board cards, got {}", board.len());
    }

    let mut seen = AHashSet::<Card>::default();
    if let Some(card) = hole.iter().chain(&board).find(|&&c| !seen.insert(c)) {
        bail!("Duplicate card {card}");
    }

    let mut config = match cli.preset {
        Preset::Default => PolicyConfig::default(),
        Preset::Tight => PolicyConfig::tight(),
        Preset::Loose => PolicyConfig::loose(),
    };

    if let Some(threshold) = cli.open_threshold {
        config.open_threshold = threshold.clamp(0.0, 100.0);
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut snapshot = RoundSnapshot::new(cli.active as usize, hole, board, cli.stacks, cli.pips)
        .with_starting_stack(cli.starting_stack);
    if let Some(bounty) = cli.bounty {
        snapshot = snapshot.with_bounty(bounty);
    }

    let legal = snapshot.legal_actions();
    let bounds = snapshot.raise_bounds();
    info!(
        "{} pot {} to call {} raise {}..={}",
        snapshot.street,
        snapshot.pot(),
        snapshot.continue_cost(),
        bounds.min,
        bounds.max
    );

    let mut agent = Agent::new(config, rng);
    agent.on_round_start();
    let action = agent.decide(&snapshot, &legal, bounds);

    println!("{action}");

    Ok(())
}
