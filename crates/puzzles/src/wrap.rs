// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Greedy text wrapping.
use std::{iter::Peekable, str::Split};

/// Splits a text at word boundaries into lines shorter than `columns`.
///
/// Words are separated by single spaces and are never broken, a word longer
/// than `columns` is yielded on a line of its own.
pub fn wrap_text(text: &str, columns: usize) -> WrapText<'_> {
    WrapText {
        words: text.split(' ').peekable(),
        columns,
    }
}

/// Iterator returned by [wrap_text].
#[derive(Debug, Clone)]
pub struct WrapText<'a> {
    words: Peekable<Split<'a, char>>,
    columns: usize,
}

impl Iterator for WrapText<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.columns;
        let mut line = self.words.next()?.to_string();
        let mut len = line.chars().count();

        while let Some(word) = self.words.next_if(|w| len + w.chars().count() < columns) {
            line.push(' ');
            line.push_str(word);
            len += word.chars().count() + 1;
        }

        Some(line)
    }
}
