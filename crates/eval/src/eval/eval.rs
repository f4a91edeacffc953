// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand value and rank types.
use serde::{Deserialize, Serialize};
use std::fmt;

use pipbot_cards::Card;

/// Number of bits used to encode the ranks that break ties within a category.
const CATEGORY_SHIFT: u32 = 20;

/// Wheel straight mask (A, 5, 4, 3, 2).
const WHEEL: u16 = 0x100F;

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns the rank for a category index 0..=8.
    pub fn from_index(idx: u32) -> Option<HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .get(idx as usize)
        .copied()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of the best five cards hand.
///
/// Values are totally ordered: a greater value is a better hand and equal
/// values split the pot. The category is stored in the bits above
/// `CATEGORY_SHIFT` and the tie-breaking ranks, most significant first, in
/// 4 bits nibbles below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// Panics if the number of cards is not in 5..=7.
    pub fn eval(cards: &[Card]) -> Self {
        assert!(
            (5..=7).contains(&cards.len()),
            "Hand must have 5 to 7 cards, got {}",
            cards.len()
        );

        let mut ranks = 0u16;
        let mut suits = [0u16; 4];
        let mut counts = [0u8; 13];

        for card in cards {
            let r = card.rank_index() as usize;
            ranks |= 1 << r;
            suits[card.suit_index()] |= 1 << r;
            counts[r] += 1;
        }

        // With at most 7 cards a flush excludes quads and full houses.
        if let Some(&flush) = suits.iter().find(|m| m.count_ones() >= 5) {
            return match straight_high(flush) {
                Some(high) => Self::new(HandRank::StraightFlush, &[high]),
                None => Self::new(HandRank::Flush, &top_ranks(flush, 5)),
            };
        }

        let (mut quads, mut trips, mut pairs) = (0u16, 0u16, 0u16);
        for (r, &n) in counts.iter().enumerate() {
            match n {
                4 => quads |= 1 << r,
                3 => trips |= 1 << r,
                2 => pairs |= 1 << r,
                _ => {}
            }
        }

        if quads != 0 {
            let q = highest(quads);
            return Self::new(HandRank::FourOfAKind, &[q, highest(ranks & !(1 << q))]);
        }

        if trips != 0 {
            let t = highest(trips);
            let rest = (trips & !(1 << t)) | pairs;
            if rest != 0 {
                return Self::new(HandRank::FullHouse, &[t, highest(rest)]);
            }
        }

        if let Some(high) = straight_high(ranks) {
            return Self::new(HandRank::Straight, &[high]);
        }

        if trips != 0 {
            let t = highest(trips);
            let k = top_ranks(ranks & !(1 << t), 2);
            return Self::new(HandRank::ThreeOfAKind, &[t, k[0], k[1]]);
        }

        match pairs.count_ones() {
            0 => Self::new(HandRank::HighCard, &top_ranks(ranks, 5)),
            1 => {
                let p = highest(pairs);
                let k = top_ranks(ranks & !(1 << p), 3);
                Self::new(HandRank::OnePair, &[p, k[0], k[1], k[2]])
            }
            _ => {
                let p1 = highest(pairs);
                let p2 = highest(pairs & !(1 << p1));
                let k = highest(ranks & !(1 << p1) & !(1 << p2));
                Self::new(HandRank::TwoPair, &[p1, p2, k])
            }
        }
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        // The category is always a valid index by construction.
        HandRank::from_index(self.0 >> CATEGORY_SHIFT).unwrap_or(HandRank::HighCard)
    }

    /// The raw ordered value.
    pub fn value(&self) -> u32 {
        self.0
    }

    fn new(rank: HandRank, kickers: &[u8]) -> Self {
        let value = kickers
            .iter()
            .enumerate()
            .fold((rank as u32) << CATEGORY_SHIFT, |acc, (idx, &k)| {
                acc | ((k as u32) << (16 - 4 * idx as u32))
            });
        Self(value)
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#08x})", self.rank(), self.0)
    }
}

/// Index of the highest rank in a non empty mask.
#[inline]
fn highest(mask: u16) -> u8 {
    debug_assert!(mask != 0);
    (15 - mask.leading_zeros()) as u8
}

/// The n highest ranks in a mask, missing ranks are zero.
#[inline]
fn top_ranks(mut mask: u16, n: usize) -> [u8; 5] {
    let mut out = [0u8; 5];
    for slot in out.iter_mut().take(n) {
        if mask == 0 {
            break;
        }

        let r = highest(mask);
        *slot = r;
        mask &= !(1 << r);
    }

    out
}

/// The highest card of a straight in the mask if any.
#[inline]
fn straight_high(mask: u16) -> Option<u8> {
    let run = mask & (mask << 1) & (mask << 2) & (mask << 3) & (mask << 4);
    if run != 0 {
        Some(highest(run))
    } else if mask & WHEEL == WHEEL {
        Some(3)
    } else {
        None
    }
}
