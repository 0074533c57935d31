// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Word search along snaking paths.
use ahash::AHashSet;

/// Returns true if `word` can be read in the puzzle along a path that moves
/// up, down, left or right without using a cell twice.
///
/// ```
/// # use kata_puzzles::snake::find_in_snaking_puzzle;
/// let puzzle = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];
/// assert!(find_in_snaking_puzzle(&puzzle, "REACT"));
/// assert!(!find_in_snaking_puzzle(&puzzle, "NULL"));
/// ```
///
/// An empty word is never found.
pub fn find_in_snaking_puzzle<S: AsRef<str>>(puzzle: &[S], word: &str) -> bool {
    let grid = puzzle
        .iter()
        .map(|row| row.as_ref().chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let word = word.chars().collect::<Vec<_>>();

    if word.is_empty() {
        return false;
    }

    let mut visited = AHashSet::default();
    (0..grid.len()).any(|row| {
        (0..grid[row].len()).any(|col| follow(&grid, &word, (row, col), &mut visited))
    })
}

/// Matches `word` starting at `pos`, `visited` holds the cells of the
/// current path and is restored before returning.
fn follow(
    grid: &[Vec<char>],
    word: &[char],
    pos: (usize, usize),
    visited: &mut AHashSet<(usize, usize)>,
) -> bool {
    let Some((&first, rest)) = word.split_first() else {
        return true;
    };

    let (row, col) = pos;
    if grid[row][col] != first || visited.contains(&pos) {
        return false;
    }

    if rest.is_empty() {
        return true;
    }

    visited.insert(pos);

    let found = neighbours(grid, pos).any(|next| follow(grid, rest, next, visited));

    visited.remove(&pos);
    found
}

/// The cells above, right, below and left of `pos` that are inside the grid.
fn neighbours(grid: &[Vec<char>], pos: (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let (row, col) = pos;
    let up = row.checked_sub(1).map(|r| (r, col));
    let right = Some((row, col + 1));
    let down = Some((row + 1, col));
    let left = col.checked_sub(1).map(|c| (row, c));

    [up, right, down, left]
        .into_iter()
        .flatten()
        .filter(move |&(r, c)| r < grid.len() && c < grid[r].len())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: [&str; 5] = ["ANGULAR", "REDNCAE", "RFIDTCL", "AGNEGSA", "YTIRTSP"];

    #[test]
    fn words_found() {
        for word in ["ANGULAR", "REACT", "UNDEFINED", "RED", "STRING", "CLASS", "ARRAY"] {
            assert!(find_in_snaking_puzzle(&PUZZLE, word), "{word}");
        }
    }

    #[test]
    fn words_not_found() {
        for word in ["FUNCTION", "NULL", "REDE", ""] {
            assert!(!find_in_snaking_puzzle(&PUZZLE, word), "{word}");
        }
    }

    #[test]
    fn no_cell_reuse() {
        assert!(find_in_snaking_puzzle(&["AB"], "AB"));
        assert!(!find_in_snaking_puzzle(&["AB"], "ABA"));
        assert!(find_in_snaking_puzzle(&["AB", "BA"], "ABAB"));
    }
}
