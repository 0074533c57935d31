// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Domino chains.
use thiserror::Error;

/// Highest value on a domino tile.
const MAX_VALUE: u8 = 6;

/// Error for tiles outside the double six set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DominoError {
    /// A tile has a value larger than six.
    #[error("invalid domino tile [{0}, {1}]")]
    InvalidTile(u8, u8),
}

/// Returns true if all the tiles can be placed in a single row, matching
/// values touching. A tile `[a, b]` can be turned into `[b, a]`.
///
/// Tiles are edges of a graph over the values 0 to 6, a row exists when the
/// used values are connected and at most two of them appear an odd number
/// of times (an Euler path).
pub fn can_make_row(tiles: &[(u8, u8)]) -> Result<bool, DominoError> {
    const VALUES: usize = MAX_VALUE as usize + 1;

    let mut degree = [0usize; VALUES];
    let mut adjacent = [[false; VALUES]; VALUES];

    for &(a, b) in tiles {
        if a > MAX_VALUE || b > MAX_VALUE {
            return Err(DominoError::InvalidTile(a, b));
        }

        let (a, b) = (a as usize, b as usize);
        degree[a] += 1;
        degree[b] += 1;
        adjacent[a][b] = true;
        adjacent[b][a] = true;
    }

    let odd = degree.iter().filter(|&&d| d % 2 == 1).count();
    if odd != 0 && odd != 2 {
        return Ok(false);
    }

    // All used values must be reachable from any used value.
    let Some(start) = degree.iter().position(|&d| d > 0) else {
        return Ok(true);
    };

    let mut visited = [false; VALUES];
    let mut stack = vec![start];
    visited[start] = true;

    while let Some(v) = stack.pop() {
        for (w, &connected) in adjacent[v].iter().enumerate() {
            if connected && !visited[w] {
                visited[w] = true;
                stack.push(w);
            }
        }
    }

    Ok((0..VALUES).all(|v| degree[v] == 0 || visited[v]))
}
