// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Postflop hand strength against all opponent holdings.
use log::trace;
use serde::{Deserialize, Serialize};

use pipbot_cards::{Card, Deck};

use crate::eval::{HandRank, HandValue};

/// The strength of a hand against every two cards an opponent may hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityResult {
    /// Fraction of opponent holdings that do not beat this hand, in `[0, 1]`.
    pub relative_strength: f64,
    /// The category of this hand best five cards.
    pub category: HandRank,
    /// Number of opponent holdings that beat this hand.
    pub beaten_by: usize,
    /// Number of opponent holdings enumerated.
    pub combos: usize,
}

/// Computes the relative strength of `hole` on `board` by enumerating every
/// two cards combination left in the deck.
///
/// An opponent holding counts against us only when its value is strictly
/// greater than ours, ties count in our favor. The enumeration is exact, the
/// same inputs always give the same result.
///
/// Panics if the board has less than 3 or more than 5 cards.
pub fn estimate(hole: [Card; 2], board: &[Card]) -> EquityResult {
    assert!(
        (3..=5).contains(&board.len()),
        "Board must have 3 to 5 cards, got {}",
        board.len()
    );

    let n = board.len();
    let mut hand = [hole[0]; 7];
    hand[..n].copy_from_slice(board);
    hand[n] = hole[0];
    hand[n + 1] = hole[1];

    let own = HandValue::eval(&hand[..n + 2]);

    let mut deck = Deck::default();
    deck.remove_all(&hand[..n + 2]);

    let mut combos = 0;
    let mut beaten_by = 0;
    deck.for_each(2, |opp| {
        hand[n] = opp[0];
        hand[n + 1] = opp[1];

        combos += 1;
        if HandValue::eval(&hand[..n + 2]) > own {
            beaten_by += 1;
        }
    });

    let relative_strength = if combos == 0 {
        1.0
    } else {
        1.0 - beaten_by as f64 / combos as f64
    };

    trace!(
        "Equity {}{} on {:?}: {} beaten by {beaten_by}/{combos} strength {relative_strength:.3}",
        hole[0],
        hole[1],
        board,
        own.rank()
    );

    EquityResult {
        relative_strength,
        category: own.rank(),
        beaten_by,
        combos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipbot_cards::parse_cards;

    fn run(hole: &str, board: &str) -> EquityResult {
        let hole = parse_cards(hole).unwrap();
        let board = parse_cards(board).unwrap();
        estimate([hole[0], hole[1]], &board)
    }

    #[test]
    fn enumerates_all_opponent_holdings() {
        // C(47, 2), C(46, 2), C(45, 2).
        assert_eq!(run("AhKh", "2c7d9s").combos, 1_081);
        assert_eq!(run("AhKh", "2c7d9sTd").combos, 1_035);
        assert_eq!(run("AhKh", "2c7d9sTd3h").combos, 990);
    }

    #[test]
    fn nuts_have_full_strength() {
        let res = run("JhTh", "AhKhQh");
        assert_eq!(res.category, HandRank::StraightFlush);
        assert_eq!(res.beaten_by, 0);
        assert_eq!(res.relative_strength, 1.0);

        let res = run("JhTh", "AhKhQh2c3d");
        assert_eq!(res.relative_strength, 1.0);
    }

    #[test]
    fn ties_count_in_our_favor() {
        // Royal flush on board, everybody plays the board.
        let res = run("2c3d", "AsKsQsJsTs");
        assert_eq!(res.category, HandRank::StraightFlush);
        assert_eq!(res.relative_strength, 1.0);
    }

    #[test]
    fn strength_is_bounded_and_ordered() {
        let set = run("9c9d", "9s4h2c");
        let air = run("3h2d", "AsKsQd");
        let pair = run("AhTc", "AsKsQd");

        for res in [set, air, pair] {
            assert!((0.0..=1.0).contains(&res.relative_strength));
        }

        assert!(set.relative_strength > 0.95);
        assert!(air.relative_strength < 0.2);
        assert!(pair.relative_strength > air.relative_strength);
        assert_eq!(set.category, HandRank::ThreeOfAKind);
        assert_eq!(air.category, HandRank::HighCard);
        assert_eq!(pair.category, HandRank::OnePair);
    }

    #[test]
    fn deterministic() {
        let a = run("KhQd", "Jc8s2h5d");
        let b = run("KhQd", "Jc8s2h5d");
        assert_eq!(a, b);

        // Hole cards order does not matter.
        let c = run("QdKh", "Jc8s2h5d");
        assert_eq!(a, c);
    }

    #[test]
    #[should_panic]
    fn preflop_board_panics() {
        run("AhKh", "");
    }
}
