// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Integer ranges compression.

/// Formats an ordered list of integers as comma separated values and ranges.
///
/// A range `a-b` is used only for runs of three or more consecutive values:
///
/// ```
/// # use kata_puzzles::ranges::extract_ranges;
/// assert_eq!(extract_ranges(&[0, 1, 2, 5, 7, 8, 9]), "0-2,5,7-9");
/// assert_eq!(extract_ranges(&[1, 2, 4, 5]), "1,2,4,5");
/// ```
pub fn extract_ranges(nums: &[i64]) -> String {
    let mut out = String::new();
    let mut rest = nums;

    while let Some((&first, tail)) = rest.split_first() {
        let run = tail
            .iter()
            .scan(first, |prev, &n| {
                (prev.checked_add(1) == Some(n)).then(|| *prev = n)
            })
            .count();
        let last = tail[..run].last().copied().unwrap_or(first);

        if !out.is_empty() {
            out.push(',');
        }

        match run {
            0 => out.push_str(&first.to_string()),
            1 => out.push_str(&format!("{first},{last}")),
            _ => out.push_str(&format!("{first}-{last}")),
        }

        rest = &tail[run..];
    }

    out
}
