// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classifier.
use kata_cards::{Card, Hand, ParseError};

use super::HandRank;

/// Ranks mask for the A-2-3-4-5 straight.
const WHEEL: u16 = 0x100f;

impl HandRank {
    /// Returns the rank of a hand.
    pub fn of(hand: &Hand) -> HandRank {
        rank(hand)
    }
}

/// Returns the rank of a hand.
///
/// Categories are checked from the strongest one so the first match is the
/// hand rank, the result doesn't depend on the order of the cards.
pub fn rank(hand: &Hand) -> HandRank {
    let cards = hand.cards();
    let flush = is_flush(cards);
    let straight = is_straight(cards);
    let kinds = Kinds::new(cards);

    if flush && straight {
        HandRank::StraightFlush
    } else if kinds.quads == 1 {
        HandRank::FourOfKind
    } else if kinds.trips == 1 && kinds.pairs == 1 {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if kinds.trips == 1 {
        HandRank::ThreeOfKind
    } else if kinds.pairs == 2 {
        HandRank::TwoPairs
    } else if kinds.pairs == 1 {
        HandRank::OnePair
    } else {
        HandRank::HighCard
    }
}

/// Parses card tokens like `"10♥"` into a hand and returns its rank.
///
/// ```
/// # use kata_eval::*;
/// let rank = rank_tokens(&["4♣", "4♠", "5♠", "5♦", "5♥"]).unwrap();
/// assert_eq!(rank, HandRank::FullHouse);
/// assert!(rank_tokens(&["4♣", "4♠", "5♠", "5♦", "5X"]).is_err());
/// ```
pub fn rank_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<HandRank, ParseError> {
    Ok(rank(&Hand::from_tokens(tokens)?))
}

fn is_flush(cards: &[Card]) -> bool {
    cards.iter().fold(0xf, |suits, c| suits & c.suit_bits()) != 0
}

fn is_straight(cards: &[Card]) -> bool {
    let mask = cards.iter().fold(0u16, |mask, c| mask | c.rank_mask());
    if mask.count_ones() != 5 {
        return false;
    }

    mask == WHEEL || mask >> mask.trailing_zeros() == 0b11111
}

/// Number of ranks seen exactly two, three and four times.
struct Kinds {
    pairs: usize,
    trips: usize,
    quads: usize,
}

impl Kinds {
    fn new(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[card.rank_bits() as usize] += 1;
        }

        let with_count = |n| counts.iter().filter(|&&c| c == n).count();
        Self {
            pairs: with_count(2),
            trips: with_count(3),
            quads: with_count(4),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kata_cards::Deck;
    use rand::prelude::*;

    fn rank_of(hand: &str) -> HandRank {
        rank(&hand.parse::<Hand>().unwrap())
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank_of("4♣ 5♣ 6♣ 7♣ 8♣"), HandRank::StraightFlush);
        assert_eq!(rank_of("A♠ 4♠ 3♠ 5♠ 2♠"), HandRank::StraightFlush);
        assert_eq!(rank_of("10♥ J♥ Q♥ K♥ A♥"), HandRank::StraightFlush);
    }

    #[test]
    fn four_of_kind() {
        assert_eq!(rank_of("4♣ 4♠ 4♥ 4♦ 10♥"), HandRank::FourOfKind);
        assert_eq!(rank_of("4♣ 4♦ 4♥ 4♠ 10♥"), HandRank::FourOfKind);
    }

    #[test]
    fn full_house() {
        assert_eq!(rank_of("4♣ 4♠ 5♠ 5♦ 5♥"), HandRank::FullHouse);
        assert_eq!(rank_of("4♣ 4♦ 5♦ 5♠ 5♥"), HandRank::FullHouse);
        assert_eq!(rank_of("A♣ K♦ A♦ K♠ A♥"), HandRank::FullHouse);
    }

    #[test]
    fn flush() {
        assert_eq!(rank_of("4♣ 5♣ 6♣ 7♣ Q♣"), HandRank::Flush);
        assert_eq!(rank_of("K♥ A♥ 2♥ 3♥ 4♥"), HandRank::Flush);
    }

    #[test]
    fn straight() {
        assert_eq!(rank_of("2♠ 3♥ 4♥ 5♥ 6♥"), HandRank::Straight);
        assert_eq!(rank_of("2♥ 4♦ 5♥ A♦ 3♠"), HandRank::Straight);
        assert_eq!(rank_of("10♠ A♥ Q♦ K♥ J♣"), HandRank::Straight);
    }

    #[test]
    fn not_straight() {
        // No wrap around the ace.
        assert_eq!(rank_of("Q♠ K♥ A♦ 2♥ 3♣"), HandRank::HighCard);
        assert_eq!(rank_of("A♠ A♥ 2♦ 3♥ 4♣"), HandRank::OnePair);
        assert_eq!(rank_of("2♠ 3♥ 4♦ 5♥ 7♣"), HandRank::HighCard);
    }

    #[test]
    fn three_of_kind() {
        assert_eq!(rank_of("2♥ 2♠ 2♦ 7♥ A♥"), HandRank::ThreeOfKind);
    }

    #[test]
    fn two_pairs() {
        assert_eq!(rank_of("2♥ 4♦ 4♥ A♦ A♠"), HandRank::TwoPairs);
    }

    #[test]
    fn one_pair() {
        assert_eq!(rank_of("3♥ 4♥ 10♥ 3♦ A♠"), HandRank::OnePair);
    }

    #[test]
    fn high_card() {
        assert_eq!(rank_of("A♥ K♥ Q♥ 2♦ 3♠"), HandRank::HighCard);
    }

    #[test]
    fn rank_tokens_errors() {
        assert_eq!(
            rank_tokens(&["A♥", "K♥", "Q♥", "2♦"]),
            Err(ParseError::HandSize {
                expected: 5,
                found: 4
            })
        );
        assert!(rank_tokens(&["A♥", "K♥", "Q♥", "2♦", "3?"]).is_err());
        assert_eq!(
            rank_tokens(&["A♥", "K♥", "Q♥", "2♦", "3♠"]),
            Ok(HandRank::HighCard)
        );
    }

    #[test]
    fn rank_permutation_invariant() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let mut deck = Deck::new_and_shuffled(&mut rng);
            let mut cards = (0..Hand::SIZE)
                .filter_map(|_| deck.deal())
                .collect::<Vec<_>>();

            let expected = rank(&Hand::try_from(cards.as_slice()).unwrap());
            for _ in 0..10 {
                cards.shuffle(&mut rng);
                let hand = Hand::try_from(cards.as_slice()).unwrap();
                assert_eq!(rank(&hand), expected, "{hand}");
            }
        }
    }

    #[test]
    fn rank_all_hands() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(Hand::SIZE, |cards| {
            let hand = Hand::try_from(cards).unwrap();
            counts[rank(&hand) as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard as usize], 1_302_540);
        assert_eq!(counts[HandRank::OnePair as usize], 1_098_240);
        assert_eq!(counts[HandRank::TwoPairs as usize], 123_552);
        assert_eq!(counts[HandRank::ThreeOfKind as usize], 54_912);
        assert_eq!(counts[HandRank::Straight as usize], 10_200);
        assert_eq!(counts[HandRank::Flush as usize], 5_108);
        assert_eq!(counts[HandRank::FullHouse as usize], 3_744);
        assert_eq!(counts[HandRank::FourOfKind as usize], 624);
        assert_eq!(counts[HandRank::StraightFlush as usize], 40);
    }
}
