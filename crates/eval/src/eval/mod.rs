// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand ranking.
//!
//! Classifies five cards hands into one of nine categories, from
//! [HandRank::HighCard] to [HandRank::StraightFlush]. Flush and straight
//! checks work on the card encoding bits, the suits bits of all cards are
//! and-ed together and the rank bits or-ed into a 13 bits mask. Kickers are
//! not compared, two hands in the same category have the same rank.

mod classify;
pub use classify::{rank, rank_tokens};

mod hand_rank;
pub use hand_rank::HandRank;
