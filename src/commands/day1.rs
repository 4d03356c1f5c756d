//! Day 1: Trebuchet?!
//!
//! Sums the calibration values of every line of the input. Part two first
//! rewrites spelled-out digits into numerals.

use super::{Answers, SolveError, numbered, open};
use crate::core::{find_calibration_value, translate_word_digits};
use crate::fixtures::{Fixtures, actual};
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Which digits count towards a calibration value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitMode {
    /// Only numerals (part one)
    Numerals,
    /// Numerals and spelled-out digit words (part two)
    Words,
}

/// Sum the calibration value of every line
///
/// # Errors
///
/// Returns `SolveError` if a line cannot be read or has no digits.
pub fn sum_calibration_values<I, S>(lines: I, mode: DigitMode) -> Result<u64, SolveError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut total = 0;

    for entry in numbered(lines) {
        let (line, text) = entry?;
        let text = text.as_ref();

        let value = match mode {
            DigitMode::Numerals => find_calibration_value(text),
            DigitMode::Words => find_calibration_value(&translate_word_digits(text)),
        }
        .map_err(|source| SolveError::Calibration { line, source })?;

        debug!(line, value, "calibration value");
        total += u64::from(value);
    }

    Ok(total)
}

/// Sum of calibration values in the file at `path`, counting numerals only
///
/// # Errors
///
/// Returns `SolveError` if the file cannot be read or a line has no digits.
pub fn part_one(path: &Path) -> Result<u64, SolveError> {
    run(path, DigitMode::Numerals)
}

/// Sum of calibration values in the file at `path`, counting digit words too
///
/// # Errors
///
/// Returns `SolveError` if the file cannot be read or a line has no digits.
pub fn part_two(path: &Path) -> Result<u64, SolveError> {
    run(path, DigitMode::Words)
}

fn run(path: &Path, mode: DigitMode) -> Result<u64, SolveError> {
    let total = sum_calibration_values(open(path)?, mode)?;
    info!(path = %path.display(), ?mode, total, "day 1 solved");
    Ok(total)
}

/// Both parts for the file at `path`
///
/// # Errors
///
/// Returns the first `SolveError` from either part.
pub fn solve(path: &Path) -> Result<Answers, SolveError> {
    Ok(Answers {
        part_one: part_one(path)?,
        part_two: part_two(path)?,
    })
}

/// First star: part one on the day 1 puzzle input
///
/// # Errors
///
/// Returns `SolveError` if the puzzle input is missing or malformed.
pub fn first_star(fixtures: &Fixtures) -> Result<u64, SolveError> {
    part_one(&fixtures.path(actual(1)))
}

/// Second star: part two on the day 1 puzzle input
///
/// # Errors
///
/// Returns `SolveError` if the puzzle input is missing or malformed.
pub fn second_star(fixtures: &Fixtures) -> Result<u64, SolveError> {
    part_two(&fixtures.path(actual(1)))
}
