//! Cube game records
//!
//! A game line looks like `Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green`.
//! Rounds are separated by semicolons, cube sets within a round by commas.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static GAME_PREFIX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\s*Game\s+([0-9]+)\s*:(.*)$").expect("game prefix pattern is valid")
});

static CUBE_SET: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9]+)\s+([a-z]+)$").expect("cube set pattern is valid")
});

/// A number of cubes of a single color drawn in one round
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeSet {
    pub count: u32,
    pub color: String,
}

impl CubeSet {
    #[must_use]
    pub fn new(count: u32, color: impl Into<String>) -> Self {
        Self {
            count,
            color: color.into(),
        }
    }
}

impl fmt::Display for CubeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.color)
    }
}

/// A parsed game: its id and the cube sets revealed in each round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub rounds: Vec<Vec<CubeSet>>,
}

impl Game {
    /// Iterate over every cube set of every round, in input order
    pub fn cube_sets(&self) -> impl Iterator<Item = &CubeSet> {
        self.rounds.iter().flatten()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}:", self.id)?;
        for (i, round) in self.rounds.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            for (j, cube_set) in round.iter().enumerate() {
                let separator = if j > 0 { "," } else { "" };
                write!(f, "{separator} {cube_set}")?;
            }
        }
        Ok(())
    }
}

/// Error type for lines that do not follow the game grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameParseError {
    #[error("malformed game line, expected `Game <id>: ...`: {0:?}")]
    MissingPrefix(String),
    #[error("game id {0:?} is out of range")]
    InvalidId(String),
    #[error("malformed cube set, expected `<count> <color>`: {0:?}")]
    MalformedCubeSet(String),
    #[error("cube count {0:?} is out of range")]
    InvalidCount(String),
}

/// Error type for a game whose power does not fit in a `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("power of game {id} does not fit in 64 bits")]
pub struct PowerOverflow {
    pub id: u32,
}

impl FromStr for Game {
    type Err = GameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_game(s)
    }
}

/// Parse a single `Game <id>: <round>; <round>; ...` line
///
/// Whitespace around separators is ignored. A blank round yields an empty round and
/// a trailing comma at the end of a round is dropped. Colors are lowercase words
/// taken as written, not checked against any palette.
///
/// # Errors
///
/// Returns `GameParseError` if:
/// - The `Game <id>:` prefix is missing
/// - The id or a count does not fit in a `u32`
/// - A comma-separated item is not `<count> <color>` with a decimal count and a
///   lowercase color
///
/// # Examples
/// ```
/// use aoc2023::core::{CubeSet, parse_game};
///
/// let game = parse_game("Game 7: 3 blue, 4 red; 2 green").unwrap();
/// assert_eq!(game.id, 7);
/// assert_eq!(game.rounds[1], vec![CubeSet::new(2, "green")]);
/// ```
pub fn parse_game(line: &str) -> Result<Game, GameParseError> {
    let captures = GAME_PREFIX
        .captures(line)
        .ok_or_else(|| GameParseError::MissingPrefix(line.to_string()))?;

    let id_text = &captures[1];
    let id = id_text
        .parse()
        .map_err(|_| GameParseError::InvalidId(id_text.to_string()))?;

    let rounds = captures[2]
        .split(';')
        .map(parse_round)
        .collect::<Result<_, _>>()?;

    Ok(Game { id, rounds })
}

fn parse_round(text: &str) -> Result<Vec<CubeSet>, GameParseError> {
    let text = text.trim();
    let text = text.strip_suffix(',').unwrap_or(text);
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',').map(parse_cube_set).collect()
}

fn parse_cube_set(text: &str) -> Result<CubeSet, GameParseError> {
    let trimmed = text.trim();
    let captures = CUBE_SET
        .captures(trimmed)
        .ok_or_else(|| GameParseError::MalformedCubeSet(trimmed.to_string()))?;

    let count_text = &captures[1];
    let count = count_text
        .parse()
        .map_err(|_| GameParseError::InvalidCount(count_text.to_string()))?;

    Ok(CubeSet::new(count, &captures[2]))
}

/// The product of the fewest cubes of each color that make every round possible
///
/// Only colors that appear in the game take part; a game with no cube sets has a
/// power of 1.
///
/// # Errors
///
/// Returns [`PowerOverflow`] if the product does not fit in a `u64`.
///
/// # Examples
/// ```
/// use aoc2023::core::{parse_game, power};
///
/// let game = parse_game("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
/// assert_eq!(power(&game), Ok(48));
/// ```
pub fn power(game: &Game) -> Result<u64, PowerOverflow> {
    let mut required: FxHashMap<&str, u32> = FxHashMap::default();
    for cube_set in game.cube_sets() {
        let entry = required.entry(cube_set.color.as_str()).or_insert(0);
        *entry = (*entry).max(cube_set.count);
    }

    // A zero maximum wins over any overflow among the other colors
    if required.values().any(|&count| count == 0) {
        return Ok(0);
    }

    required
        .values()
        .try_fold(1u64, |product, &count| product.checked_mul(u64::from(count)))
        .ok_or(PowerOverflow { id: game.id })
}
