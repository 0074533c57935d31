// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Figure grid and the rectangles scanner.
use std::iter::FusedIterator;

use crate::Rectangle;

/// A grid of characters drawn with `+`, `-`, `|` and spaces.
///
/// Rows may have different lengths, any cell outside a row reads as a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Figure {
    rows: Vec<Vec<char>>,
}

impl Figure {
    /// Creates a figure from a multi-line text, rows are split on `\n`.
    pub fn new(text: &str) -> Self {
        let rows = text
            .split('\n')
            .map(|row| row.trim_end_matches('\r').chars().collect())
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in a row, zero if the row doesn't exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Returns the character at a cell or a space if out of range.
    pub fn cell(&self, row: usize, col: usize) -> char {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(' ')
    }

    /// Returns a lazy iterator over the figure rectangles in scan order.
    pub fn rectangles(&self) -> Rectangles<'_> {
        Rectangles {
            figure: self,
            cursor: Cursor::default(),
        }
    }

    /// Tries to grow a rectangle with the `+` at `(top, left)` as its top
    /// left corner.
    ///
    /// Every `+` below the corner is a candidate bottom row, the first one
    /// that closes a rectangle wins. The walk down ends at the first cell
    /// that is neither `|` nor `+`.
    fn grow(&self, top: usize, left: usize) -> Option<Rectangle> {
        for bottom in (top + 1)..self.num_rows() {
            match self.cell(bottom, left) {
                '+' => {
                    if let Some(right) = self.close(top, left, bottom) {
                        return Some(Rectangle {
                            row: top,
                            col: left,
                            width: right - left + 1,
                            height: bottom - top + 1,
                        });
                    }
                }
                '|' => {}
                _ => return None,
            }
        }

        None
    }

    /// Walks right along the bottom row looking for the right edge column.
    ///
    /// The right edge needs a `+` on both the top and bottom rows and a `|`
    /// on every row in between. The walk ends at the first bottom cell that
    /// is neither `-` nor `+`.
    fn close(&self, top: usize, left: usize, bottom: usize) -> Option<usize> {
        for right in (left + 1)..self.row_len(top) {
            match self.cell(bottom, right) {
                '+' => {
                    if self.cell(top, right) == '+'
                        && ((top + 1)..bottom).all(|row| self.cell(row, right) == '|')
                    {
                        return Some(right);
                    }
                }
                '-' => {}
                _ => return None,
            }
        }

        None
    }
}

impl From<&str> for Figure {
    fn from(text: &str) -> Self {
        Figure::new(text)
    }
}

impl IntoIterator for Figure {
    type Item = Rectangle;
    type IntoIter = IntoRectangles;

    fn into_iter(self) -> Self::IntoIter {
        IntoRectangles {
            figure: self,
            cursor: Cursor::default(),
        }
    }
}

/// Scan position shared by the borrowing and owning iterators.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    row: usize,
    col: usize,
}

impl Cursor {
    fn next(&mut self, figure: &Figure) -> Option<Rectangle> {
        while self.row < figure.num_rows() {
            while self.col < figure.row_len(self.row) {
                let (row, col) = (self.row, self.col);
                self.col += 1;

                if figure.cell(row, col) == '+' {
                    if let Some(rect) = figure.grow(row, col) {
                        return Some(rect);
                    }
                }
            }

            self.row += 1;
            self.col = 0;
        }

        None
    }
}

/// Iterator over the rectangles of a borrowed [Figure].
#[derive(Debug, Clone)]
pub struct Rectangles<'a> {
    figure: &'a Figure,
    cursor: Cursor,
}

impl Iterator for Rectangles<'_> {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(self.figure)
    }
}

impl FusedIterator for Rectangles<'_> {}

/// Iterator over the rectangles of an owned [Figure].
#[derive(Debug, Clone)]
pub struct IntoRectangles {
    figure: Figure,
    cursor: Cursor,
}

impl Iterator for IntoRectangles {
    type Item = Rectangle;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next(&self.figure)
    }
}

impl FusedIterator for IntoRectangles {}
