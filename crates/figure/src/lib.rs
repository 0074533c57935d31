// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! ASCII figures decomposition.
//!
//! A figure is a multi-line text drawn with `+` corners, `-` and `|` edges,
//! and spaces. [decompose] breaks a figure into the rectangles it is made
//! of and renders each one as text:
//!
//! ```
//! # use kata_figure::decompose;
//! let figure = "+--+---+\n\
//!               |  |   |\n\
//!               +--+---+\n";
//!
//! let rects = decompose(figure).collect::<Vec<_>>();
//! assert_eq!(rects, ["+--+\n|  |\n+--+\n", "+---+\n|   |\n+---+\n"]);
//! ```
//!
//! Use [Figure::rectangles] to get the rectangles positions and sizes
//! instead of their text. Rectangles are yielded lazily in scan order, each
//! `+` corner yields at most one rectangle and identical rectangles are not
//! merged.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod figure;
pub use figure::{Figure, IntoRectangles, Rectangles};

mod rectangle;
pub use rectangle::Rectangle;

/// Returns the rendered text of each rectangle in a figure.
pub fn decompose(figure: &str) -> impl Iterator<Item = String> + use<> {
    Figure::new(figure).into_iter().map(|rect| rect.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn decompose_figure() {
        let figure = indoc! {"
            +------------+
            |            |
            |            |
            |            |
            +------+-----+
            |      |     |
            |      |     |
            +------+-----+
        "};

        let expected = [
            indoc! {"
                +------------+
                |            |
                |            |
                |            |
                +------------+
            "},
            indoc! {"
                +------+
                |      |
                |      |
                +------+
            "},
            indoc! {"
                +-----+
                |     |
                |     |
                +-----+
            "},
        ];

        assert_eq!(decompose(figure).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn rendered_rectangles_decompose_to_themselves() {
        let figures = [
            indoc! {"
                +------------+
                |            |
                |            |
                |            |
                +------+-----+
                |      |     |
                |      |     |
                +------+-----+
            "},
            indoc! {"
                   +-----+
                   |     |
                +--+-----+----+
                |             |
                |             |
                +-------------+
            "},
            "++\n++",
        ];

        for figure in figures {
            for rect in decompose(figure) {
                let again = decompose(&rect).collect::<Vec<_>>();
                assert_eq!(again, [rect.clone()], "{rect}");
            }
        }
    }

    #[test]
    fn empty_figure() {
        assert_eq!(decompose(" ").count(), 0);
        assert_eq!(decompose("").count(), 0);
    }
}
