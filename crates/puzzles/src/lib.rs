// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Small self contained katas.
//!
//! Each module solves one puzzle with plain functions that take a value and
//! return a value:
//!
//! ```
//! # use kata_puzzles::*;
//! assert_eq!(ranges::extract_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
//! assert_eq!(stock::most_profit(&[1, 2, 3, 4, 5, 6]), 15);
//! assert_eq!(zigzag::zigzag_matrix(2), [[0, 1], [2, 3]]);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod bank;
pub mod braces;
pub mod compass;
pub mod dominoes;
pub mod permutations;
pub mod ranges;
pub mod snake;
pub mod stock;
pub mod url;
pub mod wrap;
pub mod zigzag;
