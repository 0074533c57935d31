// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand rank categories.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a five cards hand, ordered from the weakest to the
/// strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No other category matches.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPairs,
    /// Three cards of the same rank.
    ThreeOfKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfKind,
    /// A straight of the same suit.
    StraightFlush,
}

impl HandRank {
    /// The number of hand ranks.
    pub const COUNT: usize = 9;

    /// Returns all hand ranks from the weakest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPairs,
            ThreeOfKind,
            Straight,
            Flush,
            FullHouse,
            FourOfKind,
            StraightFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPairs => "Two Pairs",
            HandRank::ThreeOfKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_order() {
        let ranks = HandRank::ranks().collect::<Vec<_>>();
        assert_eq!(ranks.len(), HandRank::COUNT);
        assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(HandRank::StraightFlush as usize, HandRank::COUNT - 1);
    }

    #[test]
    fn rank_to_string() {
        assert_eq!(HandRank::TwoPairs.to_string(), "Two Pairs");
        assert_eq!(HandRank::StraightFlush.to_string(), "Straight Flush");
    }
}
