// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Playing cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use kata_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let th = "10♥".parse::<Card>().unwrap();
//! assert!(ah.rank() > th.rank());
//! ```
//!
//! a [Hand] of five distinct cards parsed from card tokens:
//!
//! ```
//! # use kata_cards::Hand;
//! let hand = "A♠ 4♠ 3♠ 5♠ 2♠".parse::<Hand>().unwrap();
//! assert_eq!(hand.cards().len(), 5);
//! assert!("A♠ 4♠ 3♠".parse::<Hand>().is_err());
//! ```
//!
//! and a [Deck] type for shuffling and iterating cards combinations:
//!
//! ```
//! # use kata_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};

mod hand;
pub use hand::Hand;

mod parse;
pub use parse::ParseError;
