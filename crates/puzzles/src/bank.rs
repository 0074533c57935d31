// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Bank account numbers drawn with pipes and underscores.
use thiserror::Error;

/// The ten digits, each one is 3 characters wide on 3 lines.
const DIGITS: [&str; 3] = [
    " _     _  _     _  _  _  _  _ ",
    "| |  | _| _||_||_ |_   ||_||_|",
    "|_|  ||_  _|  | _||_|  ||_| _|",
];

/// Width of a digit.
const WIDTH: usize = 3;

/// Errors returned by [parse_bank_account].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankAccountError {
    /// The text has less than three lines.
    #[error("account number needs 3 lines, found {0}")]
    MissingLines(usize),
    /// The cell at the given digit position is not a digit.
    #[error("unknown digit at position {0}")]
    UnknownDigit(usize),
    /// The number doesn't fit in 64 bits.
    #[error("account number too long")]
    Overflow,
}

/// Parses an account number like:
///
/// ```text
///     _  _     _  _  _  _  _
///   | _| _||_||_ |_   ||_||_|
///   ||_  _|  | _||_|  ||_| _|
/// ```
///
/// into `123456789`. Short lines are padded with spaces.
pub fn parse_bank_account(text: &str) -> Result<u64, BankAccountError> {
    let lines = text
        .lines()
        .take(DIGITS.len())
        .map(|l| l.chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    if lines.len() < DIGITS.len() {
        return Err(BankAccountError::MissingLines(lines.len()));
    }

    let width = lines.iter().map(Vec::len).max().unwrap_or(0);
    let mut number = 0u64;

    for pos in 0..width.div_ceil(WIDTH) {
        let cell = |line: &[char]| -> String {
            (pos * WIDTH..(pos + 1) * WIDTH)
                .map(|i| line.get(i).copied().unwrap_or(' '))
                .collect()
        };

        let digit = (0..10)
            .find(|&d| {
                lines
                    .iter()
                    .zip(DIGITS)
                    .all(|(line, tpl)| cell(line.as_slice()) == tpl[d * WIDTH..(d + 1) * WIDTH])
            })
            .ok_or(BankAccountError::UnknownDigit(pos))?;

        number = number
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit as u64))
            .ok_or(BankAccountError::Overflow)?;
    }

    Ok(number)
}
