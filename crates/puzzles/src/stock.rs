// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Stock quotes profit.

/// Returns the most profit from daily stock quotes when each day one unit
/// can be bought and any number of held units can be sold.
///
/// Every unit is best sold at the highest quote that follows it, so walking
/// backward keeps the running maximum.
///
/// ```
/// # use kata_puzzles::stock::most_profit;
/// assert_eq!(most_profit(&[1, 6, 5, 10, 8, 7]), 18);
/// ```
pub fn most_profit(quotes: &[u64]) -> u64 {
    quotes
        .iter()
        .rev()
        .scan(0, |best, &quote| {
            *best = (*best).max(quote);
            Some(*best - quote)
        })
        .sum()
}
