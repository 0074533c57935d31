// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Katas command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

pub mod commands;

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a five cards poker hand, for example `rank 10♥ J♥ Q♥ K♥ A♥`.
    Rank {
        /// The card tokens, rank followed by suit.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Break an ASCII figure into its rectangles.
    Rects {
        /// The figure file, reads stdin if missing.
        file: Option<PathBuf>,
    },
    /// Wrap text at word boundaries.
    Wrap {
        /// Lines are shorter than this number of columns.
        #[clap(long, short, default_value_t = 80)]
        columns: usize,
        /// The words to wrap.
        #[clap(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Compress ascending integers into ranges.
    Ranges {
        /// The integers in ascending order.
        #[clap(required = true, num_args = 1.., allow_negative_numbers = true)]
        nums: Vec<i64>,
    },
    /// Expand shell style braces.
    Braces {
        /// The pattern to expand, for example `a{b,c}d`.
        pattern: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let out = commands::Output { json: cli.json };
    let output = match cli.command {
        Command::Rank { cards } => commands::rank(&out, &cards),
        Command::Rects { file } => commands::rects(&out, file.as_deref()),
        Command::Wrap { columns, text } => commands::wrap(&out, columns, &text.join(" ")),
        Command::Ranges { nums } => commands::ranges(&out, &nums),
        Command::Braces { pattern } => commands::braces(&out, &pattern),
    };

    if let Err(e) = commands::print(output) {
        error!("{e:#}");
        std::process::exit(1);
    }
}
