// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! String permutations.
use std::iter::FusedIterator;

/// Returns a lazy iterator over all the permutations of the chars in `s`.
///
/// Permutations are generated with Heap's algorithm, each one differs from
/// the previous by a single swap. Repeated chars yield repeated strings.
///
/// ```
/// # use kata_puzzles::permutations::permutations;
/// let perms = permutations("abc").collect::<Vec<_>>();
/// assert_eq!(perms, ["abc", "bac", "cab", "acb", "bca", "cba"]);
/// ```
pub fn permutations(s: &str) -> Permutations {
    let chars = s.chars().collect::<Vec<_>>();
    Permutations {
        counters: vec![0; chars.len()],
        chars,
        idx: 1,
        started: false,
    }
}

/// Iterator returned by [permutations].
#[derive(Debug, Clone)]
pub struct Permutations {
    chars: Vec<char>,
    counters: Vec<usize>,
    idx: usize,
    started: bool,
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.chars.iter().collect());
        }

        while self.idx < self.chars.len() {
            let i = self.idx;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.chars.swap(0, i);
                } else {
                    self.chars.swap(self.counters[i], i);
                }

                self.counters[i] += 1;
                self.idx = 1;
                return Some(self.chars.iter().collect());
            }

            self.counters[i] = 0;
            self.idx += 1;
        }

        None
    }
}

impl FusedIterator for Permutations {}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::AHashSet;

    #[test]
    fn two_chars() {
        assert_eq!(permutations("ab").collect::<Vec<_>>(), ["ab", "ba"]);
    }

    #[test]
    fn all_distinct() {
        let perms = permutations("abcde").collect::<Vec<_>>();
        assert_eq!(perms.len(), 120);

        let unique = perms.iter().collect::<AHashSet<_>>();
        assert_eq!(unique.len(), 120);
        assert!(perms.iter().all(|p| {
            let mut chars = p.chars().collect::<Vec<_>>();
            chars.sort();
            chars == ['a', 'b', 'c', 'd', 'e']
        }));
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(permutations("").collect::<Vec<_>>(), [""]);
        assert_eq!(permutations("x").collect::<Vec<_>>(), ["x"]);
    }
}
