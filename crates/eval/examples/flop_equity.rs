// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Measures the time to compute the equity of random hands on random flops,
// turns, and rivers.
//
// Run with:
//
// ```bash
// $ cargo r --release --example flop_equity
// ```

use std::time::Instant;

use pipbot_eval::*;

fn main() {
    let mut rng = rand::rng();

    for board_len in [3, 4, 5] {
        let now = Instant::now();
        let rounds = 200;
        let mut strength = 0.0;

        for _ in 0..rounds {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut deal = || deck.deal().expect("deck has cards");
            let hole = [deal(), deal()];
            let board = (0..board_len).map(|_| deal()).collect::<Vec<_>>();
            strength += equity::estimate(hole, &board).relative_strength;
        }

        let elapsed = now.elapsed().as_secs_f64();
        println!(
            "Board {board_len}: {:.3}ms per decision, mean strength {:.3}",
            elapsed * 1e3 / rounds as f64,
            strength / rounds as f64
        );
    }
}
