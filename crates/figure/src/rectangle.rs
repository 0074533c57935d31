// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rectangle type and text rendering.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rectangle found in a figure.
///
/// Sizes count characters and include both borders, the smallest rectangle
/// `++` over `++` is 2 by 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    /// Row of the top left corner.
    pub row: usize,
    /// Column of the top left corner.
    pub col: usize,
    /// Width in characters.
    pub width: usize,
    /// Height in characters.
    pub height: usize,
}

impl Rectangle {
    /// Returns `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Draws the rectangle, every line ends with a newline.
    pub fn render(&self) -> String {
        let inner = self.width.saturating_sub(2);
        let edge = format!("+{}+\n", "-".repeat(inner));
        let side = format!("|{}|\n", " ".repeat(inner));

        let mut text = String::with_capacity((inner + 3) * self.height.max(2));
        text.push_str(&edge);
        for _ in 2..self.height {
            text.push_str(&side);
        }
        text.push_str(&edge);
        text
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
