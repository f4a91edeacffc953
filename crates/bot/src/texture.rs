// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Board texture classification.
use log::trace;
use serde::{Deserialize, Serialize};

use pipbot_eval::Card;

/// Lowest rank value counted as a high card (ten).
const HIGH_CARD: u8 = 10;

/// How draw prone or paired a board is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardShape {
    /// No flush or straight draws.
    Dry,
    /// Either a flush or a straight draw.
    DrawHeavy,
    /// Both a flush and a straight draw.
    VeryDrawHeavy,
    /// At least two cards with the same rank.
    Paired,
}

/// Which player range the board hits harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardFavor {
    /// The preflop raiser range, high and disconnected boards.
    Aggressor,
    /// The caller range, low connected and suited boards.
    Caller,
    /// Neither range by a clear margin.
    Neutral,
}

/// The texture of a flop, turn, or river board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardTexture {
    /// The board shape.
    pub shape: BoardShape,
    /// Which range the board favors.
    pub favor: BoardFavor,
    /// Three or more cards of a suit.
    pub flush_draw: bool,
    /// Three distinct ranks within a five ranks span.
    pub straight_draw: bool,
    /// Points scored by features that favor the aggressor.
    pub aggressor_points: u8,
    /// Points scored by features that favor the caller.
    pub caller_points: u8,
}

impl BoardTexture {
    /// Classifies a board.
    ///
    /// Panics if the board has less than 3 or more than 5 cards.
    pub fn classify(board: &[Card]) -> Self {
        assert!(
            (3..=5).contains(&board.len()),
            "Board must have 3 to 5 cards, got {}",
            board.len()
        );

        let values = board.iter().map(|c| c.rank().value()).collect::<Vec<_>>();

        let mut distinct = values.clone();
        distinct.sort_unstable();
        distinct.dedup();

        let mut suits = [0u8; 4];
        board.iter().for_each(|c| suits[c.suit_index()] += 1);
        let max_suit = suits.iter().copied().max().unwrap_or(0);

        let flush_draw = max_suit >= 3;
        let straight_draw = distinct.windows(3).any(|w| w[2] - w[0] <= 4);
        let paired = distinct.len() < values.len();

        let shape = if paired {
            BoardShape::Paired
        } else if flush_draw && straight_draw {
            BoardShape::VeryDrawHeavy
        } else if flush_draw || straight_draw {
            BoardShape::DrawHeavy
        } else {
            BoardShape::Dry
        };

        let high_cards = values.iter().filter(|&&v| v >= HIGH_CARD).count();
        let connected = distinct.windows(2).filter(|w| w[1] - w[0] == 1).count();
        let gap_sum = distinct
            .windows(2)
            .map(|w| (w[1] - w[0]).saturating_sub(1) as u32)
            .sum::<u32>();
        let average = values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64;

        let aggressor_points = [
            high_cards >= 2,
            gap_sum >= 3,
            average > 10.0,
            connected == 0,
        ]
        .into_iter()
        .filter(|&f| f)
        .count() as u8;

        let caller_points = [
            connected >= 2,
            max_suit >= 2,
            average < 8.0,
            high_cards == 0,
        ]
        .into_iter()
        .filter(|&f| f)
        .count() as u8;

        // Require a margin larger than one point.
        let favor = if aggressor_points > caller_points + 1 {
            BoardFavor::Aggressor
        } else if caller_points > aggressor_points + 1 {
            BoardFavor::Caller
        } else {
            BoardFavor::Neutral
        };

        trace!(
            "Board {board:?} {shape:?} favors {favor:?} ({aggressor_points}/{caller_points})"
        );

        Self {
            shape,
            favor,
            flush_draw,
            straight_draw,
            aggressor_points,
            caller_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipbot_eval::parse_cards;

    fn classify(s: &str) -> BoardTexture {
        BoardTexture::classify(&parse_cards(s).unwrap())
    }

    #[test]
    fn dry_high_board_favors_aggressor() {
        let t = classify("Ah Kd 7c");
        assert_eq!(t.shape, BoardShape::Dry);
        assert_eq!(t.favor, BoardFavor::Aggressor);
        assert_eq!(t.aggressor_points, 3);
        assert_eq!(t.caller_points, 0);
    }

    #[test]
    fn low_connected_board_favors_caller() {
        let t = classify("7h 6h 5c");
        assert_eq!(t.shape, BoardShape::DrawHeavy);
        assert!(t.straight_draw);
        assert!(!t.flush_draw);
        assert_eq!(t.favor, BoardFavor::Caller);
        assert_eq!(t.aggressor_points, 0);
        assert_eq!(t.caller_points, 4);
    }

    #[test]
    fn monotone_connected_board() {
        let t = classify("9h 8h 7h");
        assert_eq!(t.shape, BoardShape::VeryDrawHeavy);
        assert!(t.flush_draw && t.straight_draw);
    }

    #[test]
    fn flush_draw_only() {
        let t = classify("Kh 8h 2h");
        assert_eq!(t.shape, BoardShape::DrawHeavy);
        assert!(t.flush_draw);
        assert!(!t.straight_draw);
    }

    #[test]
    fn paired_board_wins_over_draws() {
        let t = classify("Kh Kd 4c");
        assert_eq!(t.shape, BoardShape::Paired);
        assert_eq!(t.favor, BoardFavor::Aggressor);

        let t = classify("9h 9c 8h 7h");
        assert_eq!(t.shape, BoardShape::Paired);
    }

    #[test]
    fn near_tie_is_neutral() {
        let t = classify("Qh 8d 3c");
        assert_eq!(t.aggressor_points, 2);
        assert_eq!(t.caller_points, 1);
        assert_eq!(t.favor, BoardFavor::Neutral);
    }

    #[test]
    fn straight_draw_on_turn_window() {
        let t = classify("2c 7d 8h 9s");
        assert!(t.straight_draw);
        assert_eq!(t.shape, BoardShape::DrawHeavy);

        let t = classify("2c 7d Jh Ks 4d");
        assert!(!t.straight_draw);
    }
}
