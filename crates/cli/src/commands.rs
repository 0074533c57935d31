// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Commands implementation.
//!
//! Each command returns its output text so that `main` only has to print it.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Serialize;
use std::{fs, io, path::Path};

use kata_eval::{Hand, rank as rank_hand};
use kata_figure::Figure;
use kata_puzzles::{braces::expand_braces, ranges::extract_ranges, wrap::wrap_text};

/// Output format options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    /// Print JSON instead of plain text.
    pub json: bool,
}

impl Output {
    fn render<T: Serialize>(&self, value: &T, text: impl FnOnce() -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(text())
        }
    }
}

/// Prints a command output.
pub fn print(output: Result<String>) -> Result<()> {
    let text = output?;
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

/// Ranks a poker hand given as card tokens.
pub fn rank(out: &Output, cards: &[String]) -> Result<String> {
    let hand = Hand::from_tokens(cards).with_context(|| format!("Invalid hand {cards:?}"))?;
    let rank = rank_hand(&hand);
    debug!("Hand {hand} ranked {rank:?}");

    #[derive(Serialize)]
    struct Ranked {
        hand: Hand,
        rank: kata_eval::HandRank,
    }

    out.render(&Ranked { hand, rank }, || rank.to_string())
}

/// Decomposes a figure read from a file or from stdin.
pub fn rects(out: &Output, file: Option<&Path>) -> Result<String> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Cannot read figure {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Cannot read figure from stdin")?,
    };

    let figure = Figure::new(&text);
    let rects = figure.rectangles().collect::<Vec<_>>();
    info!("Found {} rectangles", rects.len());

    out.render(&rects, || {
        rects
            .iter()
            .map(|r| r.render())
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Wraps text at word boundaries.
pub fn wrap(out: &Output, columns: usize, text: &str) -> Result<String> {
    if columns == 0 {
        bail!("Columns must be greater than zero");
    }

    let lines = wrap_text(text, columns).collect::<Vec<_>>();
    out.render(&lines, || lines.join("\n"))
}

/// Compresses a list of ascending integers into ranges.
pub fn ranges(out: &Output, nums: &[i64]) -> Result<String> {
    if !nums.is_sorted() {
        bail!("Numbers must be in ascending order");
    }

    let ranges = extract_ranges(nums);
    out.render(&ranges, || ranges.clone())
}

/// Expands shell style braces.
pub fn braces(out: &Output, pattern: &str) -> Result<String> {
    let words = expand_braces(pattern).collect::<Vec<_>>();
    debug!("Pattern {pattern} expanded to {} words", words.len());
    out.render(&words, || words.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: Output = Output { json: false };
    const JSON: Output = Output { json: true };

    fn tokens(hand: &str) -> Vec<String> {
        hand.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn rank_command() {
        let res = rank(&TEXT, &tokens("4♣ 4♠ 5♠ 5♦ 5♥")).unwrap();
        assert_eq!(res, "Full House");

        let res = rank(&JSON, &tokens("4♣ 4♠ 5♠ 5♦ 5♥")).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&res).unwrap();
        assert_eq!(value["rank"], "FullHouse");
        assert_eq!(value["hand"][0], "4♣");
        assert_eq!(value["hand"][4], "5♥");

        assert!(rank(&TEXT, &tokens("4♣ 4♠ 5♠")).is_err());
        assert!(rank(&TEXT, &tokens("4♣ 4♠ 5♠ 5♦ 5X")).is_err());
    }

    #[test]
    fn rects_command() {
        let path = std::env::temp_dir().join(format!("katas-rects-{}.txt", std::process::id()));
        fs::write(&path, "+--+---+\n|  |   |\n+--+---+\n").unwrap();

        let res = rects(&TEXT, Some(&path)).unwrap();
        assert_eq!(res, "+--+\n|  |\n+--+\n\n+---+\n|   |\n+---+\n");

        let res = rects(&JSON, Some(&path)).unwrap();
        let value = serde_json::from_str::<serde_json::Value>(&res).unwrap();
        assert_eq!(value[1]["col"], 3);
        assert_eq!(value[1]["width"], 5);
        assert_eq!(value[1]["height"], 3);

        fs::remove_file(&path).unwrap();
        assert!(rects(&TEXT, Some(&path)).is_err());
    }

    #[test]
    fn puzzle_commands() {
        assert_eq!(
            wrap(&TEXT, 12, "The String global object").unwrap(),
            "The String\nglobal\nobject"
        );
        assert!(wrap(&TEXT, 0, "text").is_err());

        assert_eq!(ranges(&TEXT, &[0, 1, 2, 5, 7, 8, 9]).unwrap(), "0-2,5,7-9");
        assert_eq!(ranges(&JSON, &[1, 4, 5]).unwrap(), "\"1,4,5\"");
        assert!(ranges(&TEXT, &[3, 1]).is_err());
        assert_eq!(
            ranges(&TEXT, &[i64::MAX, i64::MAX]).unwrap(),
            format!("{},{}", i64::MAX, i64::MAX)
        );

        assert_eq!(braces(&TEXT, "a{b,c}d").unwrap(), "abd\nacd");
    }
}
