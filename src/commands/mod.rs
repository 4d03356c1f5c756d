//! Puzzle solutions
//!
//! Each day sums a per-line result over a fixture file. Every pass reads its input
//! exactly once and stops at the first error; no partial totals are returned.

pub mod day1;
pub mod day2;

use crate::core::{CalibrationError, ConstraintError, GameParseError, PowerOverflow};
use crate::fixtures::{FixtureLines, read_lines};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for a failed solution run
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("failed to open fixture {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("invalid calibration line {line}")]
    Calibration {
        line: usize,
        #[source]
        source: CalibrationError,
    },

    #[error("invalid game on line {line}")]
    Game {
        line: usize,
        #[source]
        source: GameParseError,
    },

    #[error("cannot validate game {id} on line {line}")]
    Constraint {
        line: usize,
        id: u32,
        #[source]
        source: ConstraintError,
    },

    #[error("power of the game on line {line} does not fit in 64 bits")]
    Power {
        line: usize,
        #[source]
        source: PowerOverflow,
    },

    #[error("running total overflowed at line {line}")]
    Overflow { line: usize },
}

/// Answers to both parts of a day's puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answers {
    pub part_one: u64,
    pub part_two: u64,
}

/// Open a puzzle input, recording its path on failure
///
/// # Errors
///
/// Returns [`SolveError::Open`] if the file cannot be opened.
pub fn open(path: &Path) -> Result<FixtureLines, SolveError> {
    read_lines(path).map_err(|source| SolveError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Pair each line with its 1-based number, turning read failures into `SolveError`
fn numbered<I, S>(lines: I) -> impl Iterator<Item = Result<(usize, S), SolveError>>
where
    I: IntoIterator<Item = io::Result<S>>,
{
    lines.into_iter().zip(1..).map(|(line, number)| {
        line.map(|text| (number, text))
            .map_err(|source| SolveError::Read {
                line: number,
                source,
            })
    })
}
