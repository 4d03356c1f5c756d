//! Day 2: Cube Conundrum
//!
//! Part one sums the ids of games possible under a constraint set; part two sums
//! the power of every game.

use super::{Answers, SolveError, numbered, open};
use crate::core::{
    ConstraintSet, Game, STANDARD_CONSTRAINT, parse_game, power, satisfies_constraints,
};
use crate::fixtures::{Fixtures, actual};
use std::io;
use std::path::Path;
use tracing::{debug, info};

fn games<I, S>(lines: I) -> impl Iterator<Item = Result<(usize, Game), SolveError>>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    numbered(lines).map(|entry| -> Result<(usize, Game), SolveError> {
        let (line, text) = entry?;
        let game = parse_game(text.as_ref()).map_err(|source| SolveError::Game { line, source })?;
        Ok((line, game))
    })
}

/// Sum the ids of every game that satisfies `constraints`
///
/// # Errors
///
/// Returns `SolveError` if a line cannot be read or parsed, or a game uses a color
/// missing from `constraints`.
pub fn summed_ids_of_valid_games<I, S>(
    lines: I,
    constraints: &ConstraintSet,
) -> Result<u64, SolveError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut total = 0;

    for entry in games(lines) {
        let (line, game) = entry?;
        let valid = satisfies_constraints(&game, constraints).map_err(|source| {
            SolveError::Constraint {
                line,
                id: game.id,
                source,
            }
        })?;

        debug!(line, id = game.id, valid, "checked game");
        if valid {
            total += u64::from(game.id);
        }
    }

    Ok(total)
}

/// Sum the power of every game
///
/// # Errors
///
/// Returns `SolveError` if a line cannot be read or parsed, or a power or the total
/// does not fit in a `u64`.
pub fn summed_power<I, S>(lines: I) -> Result<u64, SolveError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut total: u64 = 0;

    for entry in games(lines) {
        let (line, game) = entry?;
        let game_power = power(&game).map_err(|source| SolveError::Power { line, source })?;

        debug!(line, id = game.id, power = game_power, "game power");
        total = total
            .checked_add(game_power)
            .ok_or(SolveError::Overflow { line })?;
    }

    Ok(total)
}

/// Sum of valid game ids in the file at `path`
///
/// # Errors
///
/// Returns `SolveError` if the file cannot be read, a line is malformed or a color
/// has no constraint.
pub fn part_one(path: &Path, constraints: &ConstraintSet) -> Result<u64, SolveError> {
    let total = summed_ids_of_valid_games(open(path)?, constraints)?;
    info!(path = %path.display(), total, "day 2 part one solved");
    Ok(total)
}

/// Sum of game powers in the file at `path`
///
/// # Errors
///
/// Returns `SolveError` if the file cannot be read or a line is malformed.
pub fn part_two(path: &Path) -> Result<u64, SolveError> {
    let total = summed_power(open(path)?)?;
    info!(path = %path.display(), total, "day 2 part two solved");
    Ok(total)
}

/// Both parts for the file at `path`
///
/// # Errors
///
/// Returns the first `SolveError` from either part.
pub fn solve(path: &Path, constraints: &ConstraintSet) -> Result<Answers, SolveError> {
    Ok(Answers {
        part_one: part_one(path, constraints)?,
        part_two: part_two(path)?,
    })
}

/// First star: valid game ids of the day 2 puzzle input under the standard bag
///
/// # Errors
///
/// Returns `SolveError` if the puzzle input is missing or malformed.
pub fn first_star(fixtures: &Fixtures) -> Result<u64, SolveError> {
    part_one(&fixtures.path(actual(2)), &STANDARD_CONSTRAINT)
}

/// Second star: summed power of the day 2 puzzle input
///
/// # Errors
///
/// Returns `SolveError` if the puzzle input is missing or malformed.
pub fn second_star(fixtures: &Fixtures) -> Result<u64, SolveError> {
    part_two(&fixtures.path(actual(2)))
}
