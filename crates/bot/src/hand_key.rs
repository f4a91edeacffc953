// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical preflop hand classes.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use pipbot_eval::{Card, ParseCardError, Rank};

/// Error returned when parsing a hand key like `AKs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseHandKeyError {
    /// Invalid rank character.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// Invalid key format.
    #[error("invalid hand key '{0}'")]
    InvalidKey(String),
}

/// Whether the two hole cards are a pair, suited, or offsuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandKind {
    /// Both cards have the same rank.
    Pair,
    /// Both cards have the same suit.
    Suited,
    /// Different ranks and suits.
    Offsuit,
}

/// One of the 169 canonical two cards hand classes.
///
/// The higher rank always comes first, pairs have no suffix, suited hands
/// are written with an `s` and offsuit hands with an `o` (e.g. `AKs`, `72o`,
/// `TT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandKey {
    high: Rank,
    low: Rank,
    kind: HandKind,
}

impl HandKey {
    /// Number of hand classes.
    pub const COUNT: usize = 169;

    /// Number of two cards combinations.
    pub const COMBOS: usize = 1_326;

    /// Creates the key for two hole cards, the cards order does not matter.
    pub fn new(c1: Card, c2: Card) -> Self {
        let (high, low) = if c1.rank() >= c2.rank() {
            (c1.rank(), c2.rank())
        } else {
            (c2.rank(), c1.rank())
        };

        let kind = if high == low {
            HandKind::Pair
        } else if c1.suit() == c2.suit() {
            HandKind::Suited
        } else {
            HandKind::Offsuit
        };

        Self { high, low, kind }
    }

    /// Creates the key for hole cards.
    pub fn from_hole(hole: [Card; 2]) -> Self {
        Self::new(hole[0], hole[1])
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank, equal to the higher rank for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// The hand kind.
    pub fn kind(&self) -> HandKind {
        self.kind
    }

    /// Checks if the key contains the given rank.
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.high == rank || self.low == rank
    }

    /// Number of card combinations in this class.
    pub fn combos(&self) -> usize {
        match self.kind {
            HandKind::Pair => 6,
            HandKind::Suited => 4,
            HandKind::Offsuit => 12,
        }
    }

    /// Iterates all the 169 hand keys.
    pub fn all() -> impl Iterator<Item = HandKey> {
        Rank::ranks().flat_map(|high| {
            Rank::ranks().filter(move |low| *low <= high).flat_map(move |low| {
                let kinds: &[HandKind] = if low == high {
                    &[HandKind::Pair]
                } else {
                    &[HandKind::Suited, HandKind::Offsuit]
                };

                kinds.iter().map(move |&kind| HandKey { high, low, kind })
            })
        })
    }
}

impl fmt::Display for HandKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HandKind::Pair => write!(f, "{}{}", self.high, self.low),
            HandKind::Suited => write!(f, "{}{}s", self.high, self.low),
            HandKind::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl FromStr for HandKey {
    type Err = ParseHandKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseHandKeyError::InvalidKey(s.to_string());

        let chars = s.trim().chars().collect::<Vec<_>>();
        let (r1, r2, suffix) = match chars.as_slice() {
            [r1, r2] => (Rank::from_char(*r1)?, Rank::from_char(*r2)?, None),
            [r1, r2, k] => (Rank::from_char(*r1)?, Rank::from_char(*r2)?, Some(*k)),
            _ => return Err(invalid()),
        };

        let (high, low) = (r1.max(r2), r1.min(r2));
        let kind = match (high == low, suffix) {
            (true, None) => HandKind::Pair,
            (false, Some('s' | 'S')) => HandKind::Suited,
            (false, Some('o' | 'O')) => HandKind::Offsuit,
            _ => return Err(invalid()),
        };

        Ok(Self { high, low, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::{AHashMap, AHashSet};
    use pipbot_eval::{Deck, Suit, parse_cards};

    fn key(s: &str) -> HandKey {
        let cards = parse_cards(s).unwrap();
        HandKey::new(cards[0], cards[1])
    }

    #[test]
    fn key_format() {
        assert_eq!(key("AhKh").to_string(), "AKs");
        assert_eq!(key("KhAh").to_string(), "AKs");
        assert_eq!(key("Kd2c").to_string(), "K2o");
        assert_eq!(key("2c7d").to_string(), "72o");
        assert_eq!(key("TsTd").to_string(), "TT");
        assert_eq!(key("9c8c").kind(), HandKind::Suited);
    }

    #[test]
    fn all_combos_map_to_169_keys() {
        let mut keys = AHashMap::<HandKey, usize>::default();
        Deck::default().for_each(2, |hand| {
            let k1 = HandKey::new(hand[0], hand[1]);
            let k2 = HandKey::new(hand[1], hand[0]);
            assert_eq!(k1, k2);
            *keys.entry(k1).or_default() += 1;
        });

        assert_eq!(keys.len(), HandKey::COUNT);

        // Each key sees exactly its number of combos.
        for (key, count) in &keys {
            assert_eq!(key.combos(), *count, "{key}");
        }

        assert_eq!(keys.values().sum::<usize>(), HandKey::COMBOS);
    }

    #[test]
    fn all_keys() {
        let keys = HandKey::all().collect::<AHashSet<_>>();
        assert_eq!(keys.len(), HandKey::COUNT);
        assert_eq!(keys.iter().filter(|k| k.kind() == HandKind::Pair).count(), 13);
        assert_eq!(keys.iter().filter(|k| k.kind() == HandKind::Suited).count(), 78);
        assert_eq!(keys.iter().filter(|k| k.kind() == HandKind::Offsuit).count(), 78);
        assert_eq!(HandKey::all().map(|k| k.combos()).sum::<usize>(), HandKey::COMBOS);
    }

    #[test]
    fn parse_key() {
        for k in HandKey::all() {
            assert_eq!(k.to_string().parse::<HandKey>(), Ok(k));
        }

        assert_eq!("KAs".parse::<HandKey>(), "AKs".parse::<HandKey>());
        assert!("AAs".parse::<HandKey>().is_err());
        assert!("AK".parse::<HandKey>().is_err());
        assert!("AKx".parse::<HandKey>().is_err());
        assert!("A1s".parse::<HandKey>().is_err());
    }

    #[test]
    fn key_ranks() {
        let k = HandKey::new(
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
        );
        assert_eq!(k.high(), Rank::Ace);
        assert_eq!(k.low(), Rank::Seven);
        assert!(k.has_rank(Rank::Seven));
        assert!(!k.has_rank(Rank::King));
    }
}
