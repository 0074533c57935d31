// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::{Card, ParseError};

/// A hand of exactly five distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hand([Card; Hand::SIZE]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand, fails if a card appears more than once.
    pub fn new(cards: [Card; Hand::SIZE]) -> Result<Self, ParseError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[i + 1..].contains(card) {
                return Err(ParseError::DuplicateCard(*card));
            }
        }

        Ok(Self(cards))
    }

    /// Creates a hand from card tokens like `["10♥", "J♥", ...]`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ParseError> {
        let cards = tokens
            .iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Hand::try_from(cards.as_slice())
    }

    /// The hand cards in input order.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = ParseError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards = <[Card; Hand::SIZE]>::try_from(cards).map_err(|_| ParseError::HandSize {
            expected: Hand::SIZE,
            found: cards.len(),
        })?;
        Hand::new(cards)
    }
}

/// Parses a hand from card tokens separated by spaces or commas.
impl FromStr for Hand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        Hand::from_tokens(&tokens)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    #[test]
    fn hand_from_tokens() {
        let hand = Hand::from_tokens(&["4♣", "5♣", "6♣", "7♣", "8♣"]).unwrap();
        assert_eq!(hand.cards().len(), Hand::SIZE);
        assert_eq!(hand.cards()[0], Card::new(Rank::Four, Suit::Clubs));
        assert_eq!(hand.cards()[4], Card::new(Rank::Eight, Suit::Clubs));
        assert_eq!(hand.to_string(), "4♣ 5♣ 6♣ 7♣ 8♣");
    }

    #[test]
    fn hand_from_str() {
        let hand = "10♥, J♥, Q♥, K♥, A♥".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "10♥ J♥ Q♥ K♥ A♥");

        let hand = "TH JH QH KH AH".parse::<Hand>().unwrap();
        assert_eq!(hand.to_string(), "10♥ J♥ Q♥ K♥ A♥");
    }

    #[test]
    fn hand_size_errors() {
        assert_eq!(
            "A♠ K♠ Q♠ J♠".parse::<Hand>(),
            Err(ParseError::HandSize {
                expected: 5,
                found: 4
            })
        );

        assert_eq!(
            "A♠ K♠ Q♠ J♠ 10♠ 9♠".parse::<Hand>(),
            Err(ParseError::HandSize {
                expected: 5,
                found: 6
            })
        );
    }

    #[test]
    fn hand_duplicate_card() {
        assert_eq!(
            "A♠ K♠ A♠ J♠ 10♠".parse::<Hand>(),
            Err(ParseError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
        );
    }

    #[test]
    fn hand_invalid_token() {
        assert_eq!(
            "A♠ K♠ Z♠ J♠ 10♠".parse::<Hand>(),
            Err(ParseError::InvalidRank("Z".to_string()))
        );
    }

    #[test]
    fn hand_serializes_card_tokens() {
        let hand = "A♠ 4♠ 3♠ 5♠ 2♠".parse::<Hand>().unwrap();
        assert_eq!(
            serde_json::to_string(&hand).unwrap(),
            r#"["A♠","4♠","3♠","5♠","2♠"]"#
        );
    }
}
