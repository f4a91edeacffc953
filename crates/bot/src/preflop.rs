// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Preflop hand strength table.
//!
//! Every canonical hand class maps to its win rate against a random hand,
//! its rank among the 169 classes, and its range percentile: the share of
//! the 1326 two cards combinations that are at least as strong, so `AA` is
//! the top 0.45% of hands and `72o` closes the range at 100%.
use ahash::AHashMap;
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::hand_key::HandKey;

/// Preflop statistics for a hand class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreflopStats {
    /// Percentage of wins against a random hand.
    pub win_rate: f64,
    /// Rank among the 169 hand classes, 1 is the strongest.
    pub rank: u8,
    /// Percentage of combinations at least as strong, lower is stronger.
    pub percentile: f64,
}

impl PreflopStats {
    /// Stats used for a hand missing from the table, the weakest hand.
    pub const FALLBACK: PreflopStats = PreflopStats {
        win_rate: 30.0,
        rank: 169,
        percentile: 100.0,
    };
}

/// (key, win rate, rank, percentile) sorted by rank.
#[rustfmt::skip]
static HAND_STATS: &[(&str, f64, u8, f64)] = &[
    ("AA", 84.90, 1, 0.45),
    ("KK", 82.10, 2, 0.90),
    ("QQ", 79.60, 3, 1.36),
    ("AKs", 66.20, 4, 1.66),
    ("JJ", 77.10, 5, 2.11),
    ("AQs", 65.40, 6, 2.41),
    ("KQs", 62.40, 7, 2.71),
    ("AJs", 64.40, 8, 3.02),
    ("KJs", 61.40, 9, 3.32),
    ("TT", 74.70, 10, 3.77),
    ("AKo", 64.50, 11, 4.68),
    ("ATs", 63.40, 12, 4.98),
    ("QJs", 59.10, 13, 5.28),
    ("KTs", 60.40, 14, 5.58),
    ("QTs", 58.10, 15, 5.88),
    ("JTs", 56.20, 16, 6.18),
    ("99", 71.70, 17, 6.64),
    ("AQo", 63.70, 18, 7.54),
    ("A9s", 61.40, 19, 7.84),
    ("KQo", 60.50, 20, 8.75),
    ("88", 68.70, 21, 9.20),
    ("K9s", 58.40, 22, 9.50),
    ("T9s", 52.40, 23, 9.80),
    ("A8s", 60.30, 24, 10.11),
    ("Q9s", 56.10, 25, 10.41),
    ("J9s", 54.20, 26, 10.71),
    ("AJo", 62.70, 27, 11.61),
    ("A5s", 57.70, 28, 11.92),
    ("77", 65.70, 29, 12.37),
    ("A7s", 59.10, 30, 12.67),
    ("KJo", 59.50, 31, 13.57),
    ("A4s", 56.70, 32, 13.88),
    ("A3s", 55.90, 33, 14.18),
    ("A6s", 57.80, 34, 14.48),
    ("QJo", 57.00, 35, 15.38),
    ("66", 62.70, 36, 15.84),
    ("K8s", 56.40, 37, 16.14),
    ("T8s", 50.40, 38, 16.44),
    ("A2s", 55.00, 39, 16.74),
    ("98s", 48.90, 40, 17.04),
    ("J8s", 52.30, 41, 17.35),
    ("ATo", 61.70, 42, 18.25),
    ("Q8s", 54.20, 43, 18.55),
    ("K7s", 55.40, 44, 18.85),
    ("KTo", 58.50, 45, 19.76),
    ("55", 59.60, 46, 20.21),
    ("JTo", 53.80, 47, 21.12),
    ("87s", 45.70, 48, 21.42),
    ("QTo", 56.00, 49, 22.32),
    ("44", 56.30, 50, 22.78),
    ("33", 52.90, 51, 23.23),
    ("22", 49.30, 52, 23.68),
    ("K6s", 54.30, 53, 23.98),
    ("97s", 46.90, 54, 24.28),
    ("K5s", 53.30, 55, 24.59),
    ("76s", 42.90, 56, 24.89),
    ("T7s", 48.40, 57, 25.19),
    ("K4s", 52.30, 58, 25.49),
    ("K3s", 51.40, 59, 25.79),
    ("K2s", 50.50, 60, 26.09),
    ("Q7s", 52.10, 61, 26.40),
    ("86s", 43.70, 62, 26.70),
    ("65s", 40.30, 63, 27.00),
    ("J7s", 50.30, 64, 27.30),
    ("54s", 38.50, 65, 27.60),
    ("Q6s", 51.30, 66, 27.90),
    ("75s", 40.90, 67, 28.21),
    ("96s", 44.90, 68, 28.51),
    ("Q5s", 50.20, 69, 28.81),
    ("64s", 38.30, 70, 29.11),
    ("Q4s", 49.30, 71, 29.41),
    ("Q3s", 48.40, 72, 29.71),
    ("T9o", 49.80, 73, 30.62),
    ("T6s", 46.50, 74, 30.92),
    ("Q2s", 47.50, 75, 31.22),
    ("A9o", 59.70, 76, 32.13),
    ("53s", 36.50, 77, 32.43),
    ("85s", 41.70, 78, 32.73),
    ("J6s", 48.30, 79, 33.03),
    ("J9o", 51.80, 80, 33.94),
    ("K9o", 56.50, 81, 34.84),
    ("J5s", 47.50, 82, 35.14),
    ("Q9o", 54.00, 83, 36.05),
    ("43s", 35.70, 84, 36.35),
    ("74s", 38.90, 85, 36.65),
    ("J4s", 46.50, 86, 36.95),
    ("J3s", 45.70, 87, 37.25),
    ("95s", 42.90, 88, 37.56),
    ("J2s", 44.70, 89, 37.86),
    ("63s", 36.40, 90, 38.16),
    ("A8o", 58.60, 91, 39.06),
    ("52s", 34.50, 92, 39.37),
    ("T5s", 44.50, 93, 39.67),
    ("84s", 39.70, 94, 39.97),
    ("T4s", 43.70, 95, 40.27),
    ("T3s", 42.80, 96, 40.57),
    ("42s", 33.70, 97, 40.87),
    ("T2s", 42.00, 98, 41.18),
    ("98o", 46.10, 99, 42.08),
    ("T8o", 47.80, 100, 42.99),
    ("A5o", 56.00, 101, 43.89),
    ("A7o", 57.40, 102, 44.80),
    ("73s", 37.00, 103, 45.10),
    ("A4o", 55.00, 104, 46.00),
    ("32s", 33.10, 105, 46.30),
    ("94s", 40.90, 106, 46.61),
    ("93s", 40.30, 107, 46.91),
    ("J8o", 49.90, 108, 47.81),
    ("A3o", 54.20, 109, 48.72),
    ("62s", 34.40, 110, 49.02),
    ("92s", 39.40, 111, 49.32),
    ("K8o", 54.50, 112, 50.23),
    ("A6o", 56.10, 113, 51.13),
    ("87o", 42.70, 114, 52.04),
    ("Q8o", 52.10, 115, 52.94),
    ("83s", 37.80, 116, 53.24),
    ("A2o", 53.30, 117, 54.15),
    ("82s", 37.20, 118, 54.45),
    ("97o", 44.10, 119, 55.35),
    ("72s", 35.10, 120, 55.66),
    ("76o", 39.70, 121, 56.56),
    ("K7o", 53.50, 122, 57.47),
    ("65o", 37.00, 123, 58.37),
    ("T7o", 45.80, 124, 59.28),
    ("K6o", 52.40, 125, 60.18),
    ("86o", 40.70, 126, 61.09),
    ("54o", 35.10, 127, 61.99),
    ("K5o", 51.40, 128, 62.90),
    ("J7o", 47.90, 129, 63.80),
    ("75o", 37.70, 130, 64.71),
    ("Q7o", 50.10, 131, 65.61),
    ("K4o", 50.40, 132, 66.52),
    ("K3o", 49.50, 133, 67.42),
    ("96o", 42.10, 134, 68.33),
    ("K2o", 48.60, 135, 69.23),
    ("64o", 35.00, 136, 70.14),
    ("Q6o", 49.30, 137, 71.04),
    ("53o", 33.10, 138, 71.95),
    ("85o", 38.70, 139, 72.85),
    ("T6o", 43.90, 140, 73.76),
    ("Q5o", 48.20, 141, 74.66),
    ("43o", 32.10, 142, 75.57),
    ("Q4o", 47.30, 143, 76.47),
    ("Q3o", 46.40, 144, 77.38),
    ("74o", 35.70, 145, 78.28),
    ("Q2o", 45.50, 146, 79.19),
    ("J6o", 45.90, 147, 80.09),
    ("63o", 33.10, 148, 81.00),
    ("J5o", 45.10, 149, 81.90),
    ("95o", 40.10, 150, 82.81),
    ("52o", 31.10, 151, 83.71),
    ("J4o", 44.10, 152, 84.62),
    ("J3o", 43.30, 153, 85.52),
    ("42o", 30.10, 154, 86.43),
    ("J2o", 42.30, 155, 87.33),
    ("84o", 36.70, 156, 88.24),
    ("T5o", 41.90, 157, 89.14),
    ("T4o", 41.10, 158, 90.05),
    ("32o", 29.30, 159, 90.95),
    ("T3o", 40.20, 160, 91.86),
    ("73o", 33.80, 161, 92.76),
    ("T2o", 39.40, 162, 93.67),
    ("62o", 31.10, 163, 94.57),
    ("94o", 38.10, 164, 95.48),
    ("93o", 37.50, 165, 96.38),
    ("92o", 36.60, 166, 97.29),
    ("83o", 34.80, 167, 98.19),
    ("82o", 34.20, 168, 99.10),
    ("72o", 31.90, 169, 100.00),
];

static TABLE: LazyLock<AHashMap<HandKey, PreflopStats>> = LazyLock::new(|| {
    HAND_STATS
        .iter()
        .filter_map(|&(key, win_rate, rank, percentile)| {
            let stats = PreflopStats {
                win_rate,
                rank,
                percentile,
            };
            key.parse::<HandKey>().ok().map(|k| (k, stats))
        })
        .collect()
});

/// Returns the stats for a hand class.
///
/// Never fails, a hand missing from the table gets [PreflopStats::FALLBACK].
pub fn lookup(key: HandKey) -> PreflopStats {
    match TABLE.get(&key) {
        Some(stats) => *stats,
        None => {
            warn!("No preflop stats for {key}");
            PreflopStats::FALLBACK
        }
    }
}

/// Iterates the table in rank order.
pub fn ranked() -> impl Iterator<Item = (HandKey, PreflopStats)> {
    HAND_STATS.iter().filter_map(|&(key, _, _, _)| {
        let key = key.parse::<HandKey>().ok()?;
        Some((key, lookup(key)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(key: &str) -> PreflopStats {
        lookup(key.parse().unwrap())
    }

    #[test]
    fn every_key_has_stats() {
        assert_eq!(TABLE.len(), HandKey::COUNT);

        for key in HandKey::all() {
            let s = lookup(key);
            assert!((0.0..=100.0).contains(&s.percentile), "{key}");
            assert!((1..=169).contains(&s.rank), "{key}");
            assert!(s.win_rate > 0.0 && s.win_rate < 100.0, "{key}");
        }
    }

    #[test]
    fn reference_hands() {
        let aa = stats("AA");
        assert_eq!(aa.rank, 1);
        assert_eq!(aa.win_rate, 84.90);

        let aks = stats("AKs");
        assert_eq!(aks.rank, 4);
        assert_eq!(aks.percentile, 1.66);

        let worst = stats("72o");
        assert_eq!(worst.rank, 169);
        assert_eq!(worst.percentile, 100.0);
    }

    #[test]
    fn percentiles_follow_combos() {
        let mut combos = 0;
        let mut last_rank = 0;

        for (key, s) in ranked() {
            combos += key.combos();
            assert_eq!(s.rank, last_rank + 1);
            last_rank = s.rank;

            let expected = combos as f64 * 100.0 / HandKey::COMBOS as f64;
            assert!((s.percentile - expected).abs() < 0.01, "{key}");
        }

        assert_eq!(combos, HandKey::COMBOS);
        assert_eq!(last_rank, 169);
    }
}
