// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card tokens parsing.
//!
//! A card token is a rank followed by a suit, for example `10♥`, `A♠` or
//! `TH`. Ranks are `2` to `10`, `T`, `J`, `Q`, `K`, `A` and suits are either
//! the symbols `♣ ♦ ♥ ♠` or the letters `C D H S`, letters are case
//! insensitive.
use std::str::FromStr;
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// Error returned when cards or hands can't be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is empty.
    #[error("empty card token")]
    EmptyToken,
    /// The rank part of a token is not a rank.
    #[error("invalid rank '{0}'")]
    InvalidRank(String),
    /// The suit part of a token is not a suit.
    #[error("invalid suit '{0}'")]
    InvalidSuit(String),
    /// A hand doesn't have the expected number of cards.
    #[error("a hand needs {expected} cards, found {found}")]
    HandSize {
        /// Expected number of cards.
        expected: usize,
        /// Number of cards found.
        found: usize,
    },
    /// The same card appears twice in a hand.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
}

impl FromStr for Rank {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(ParseError::InvalidRank(s.to_string())),
        };

        Ok(rank)
    }
}

impl TryFrom<char> for Suit {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '♣' | '♧' | 'C' | 'c' => Ok(Suit::Clubs),
            '♦' | '♢' | 'D' | 'd' => Ok(Suit::Diamonds),
            '♥' | '♡' | 'H' | 'h' => Ok(Suit::Hearts),
            '♠' | '♤' | 'S' | 's' => Ok(Suit::Spades),
            _ => Err(ParseError::InvalidSuit(c.to_string())),
        }
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        // The suit is always the last char, the rank may take two chars.
        let Some((idx, suit)) = token.char_indices().next_back() else {
            return Err(ParseError::EmptyToken);
        };

        let rank = token[..idx].parse::<Rank>()?;
        let suit = Suit::try_from(suit)?;
        Ok(Card::new(rank, suit))
    }
}
