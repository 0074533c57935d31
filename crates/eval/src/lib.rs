// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand ranking.
//!
//! To rank a hand parse it from card tokens and use [rank] or
//! [HandRank::of] to get its category:
//!
//! ```
//! # use kata_eval::*;
//! let hand = "A♠ 4♠ 3♠ 5♠ 2♠".parse::<Hand>().unwrap();
//! assert_eq!(rank(&hand), HandRank::StraightFlush);
//!
//! let hand = "A♥ K♥ Q♥ 2♦ 3♠".parse::<Hand>().unwrap();
//! assert_eq!(HandRank::of(&hand), HandRank::HighCard);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, rank, rank_tokens};

// Reexport cards types.
pub use kata_cards::{Card, Deck, Hand, ParseError, Rank, Suit};
