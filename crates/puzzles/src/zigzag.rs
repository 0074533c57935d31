// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! JPEG zigzag matrix.

/// Returns an `n x n` matrix numbered along the JPEG zigzag path.
///
/// ```text
/// [[ 0, 1, 5, 6 ],
///  [ 2, 4, 7,12 ],
///  [ 3, 8,11,13 ],
///  [ 9,10,14,15 ]]
/// ```
pub fn zigzag_matrix(n: usize) -> Vec<Vec<usize>> {
    let mut matrix = vec![vec![0; n]; n];
    let (mut row, mut col) = (0, 0);

    for value in 0..n * n {
        matrix[row][col] = value;

        if (row + col) % 2 == 0 {
            // Moving up and right.
            if col + 1 < n {
                col += 1;
                row = row.saturating_sub(1);
            } else {
                row += 1;
            }
        } else if row + 1 < n {
            // Moving down and left.
            row += 1;
            col = col.saturating_sub(1);
        } else {
            col += 1;
        }
    }

    matrix
}
