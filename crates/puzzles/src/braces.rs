// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Shell style brace expansion.
use ahash::AHashSet;
use std::iter::FusedIterator;

/// Expands the balanced braces of a pattern, `a{b,c}d` yields `abd` and
/// `acd`.
///
/// Groups can be nested and an empty alternative is allowed, each distinct
/// string is yielded once. A pattern without braces yields itself.
///
/// ```
/// # use kata_puzzles::braces::expand_braces;
/// let mut names = expand_braces("thumbnail.{png,jp{e,}g}").collect::<Vec<_>>();
/// names.sort();
/// assert_eq!(names, ["thumbnail.jpeg", "thumbnail.jpg", "thumbnail.png"]);
/// ```
pub fn expand_braces(pattern: &str) -> ExpandBraces {
    ExpandBraces {
        pending: vec![pattern.to_string()],
        seen: AHashSet::default(),
    }
}

/// Iterator returned by [expand_braces].
#[derive(Debug, Clone)]
pub struct ExpandBraces {
    pending: Vec<String>,
    seen: AHashSet<String>,
}

impl Iterator for ExpandBraces {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(s) = self.pending.pop() {
            match innermost_group(&s) {
                Some((open, close)) => {
                    let (head, tail) = (&s[..open], &s[close + 1..]);
                    // Reversed so that alternatives pop in their written order.
                    for alt in s[open + 1..close].rsplit(',') {
                        self.pending.push(format!("{head}{alt}{tail}"));
                    }
                }
                None => {
                    if self.seen.insert(s.clone()) {
                        return Some(s);
                    }
                }
            }
        }

        None
    }
}

impl FusedIterator for ExpandBraces {}

/// Returns the byte offsets of the first `{...}` group that contains no
/// other brace.
fn innermost_group(s: &str) -> Option<(usize, usize)> {
    let mut open = None;
    for (idx, c) in s.char_indices() {
        match c {
            '{' => open = Some(idx),
            '}' => {
                if let Some(open) = open {
                    return Some((open, idx));
                }
            }
            _ => {}
        }
    }

    None
}
