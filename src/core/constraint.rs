//! Per-color constraints on cube counts
//!
//! A [`ConstraintSet`] maps each color to a [`Constraint`], a comparison against a
//! fixed bound. Games are checked with [`satisfies_constraints`].

use super::Game;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// The standard bag: 12 red, 13 green and 14 blue cubes
pub static STANDARD_CONSTRAINT: LazyLock<ConstraintSet> = LazyLock::new(ConstraintSet::standard);

/// How a drawn count is compared against a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `count <= bound`
    LessEqual,
    /// `count >= bound`
    GreaterEqual,
    /// `count == bound`
    Equal,
}

impl Comparison {
    /// Whether `count` satisfies this comparison against `bound`
    #[inline]
    #[must_use]
    pub const fn holds(self, count: u32, bound: u32) -> bool {
        match self {
            Self::LessEqual => count <= bound,
            Self::GreaterEqual => count >= bound,
            Self::Equal => count == bound,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "=",
        }
    }
}

/// A comparison bound to a numeric limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub comparison: Comparison,
    pub bound: u32,
}

impl Constraint {
    #[must_use]
    pub const fn new(comparison: Comparison, bound: u32) -> Self {
        Self { comparison, bound }
    }

    #[must_use]
    pub const fn at_most(bound: u32) -> Self {
        Self::new(Comparison::LessEqual, bound)
    }

    #[must_use]
    pub const fn at_least(bound: u32) -> Self {
        Self::new(Comparison::GreaterEqual, bound)
    }

    #[must_use]
    pub const fn exactly(bound: u32) -> Self {
        Self::new(Comparison::Equal, bound)
    }

    #[inline]
    #[must_use]
    pub const fn allows(self, count: u32) -> bool {
        self.comparison.holds(count, self.bound)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.comparison.symbol(), self.bound)
    }
}

/// Error type for games that mention a color the constraint set does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("no constraint for color {0:?}")]
    UnknownColor(String),
}

/// Error type for constraint rules given as text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintParseError {
    #[error("constraint rule {0:?} must look like `red<=12`, `red>=1` or `red=5`")]
    Malformed(String),
    #[error("constraint bound {0:?} is not a valid count")]
    InvalidBound(String),
}

/// A single `color<op>bound` rule, as accepted on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintRule {
    pub color: String,
    pub constraint: Constraint,
}

impl FromStr for ConstraintRule {
    type Err = ConstraintParseError;

    /// Parse `red<=12`, `red>=1` or `red=5`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConstraintParseError::Malformed(s.to_string());

        // Two-character operators first so `<=` is not read as `=`
        let (color, comparison, bound) = [
            ("<=", Comparison::LessEqual),
            (">=", Comparison::GreaterEqual),
            ("=", Comparison::Equal),
        ]
        .into_iter()
        .find_map(|(symbol, comparison)| {
            s.split_once(symbol)
                .map(|(color, bound)| (color, comparison, bound))
        })
        .ok_or_else(malformed)?;

        let color = color.trim();
        if color.is_empty() || !color.chars().all(char::is_alphanumeric) {
            return Err(malformed());
        }

        let bound = bound.trim();
        let bound = bound
            .parse()
            .map_err(|_| ConstraintParseError::InvalidBound(bound.to_string()))?;

        Ok(Self {
            color: color.to_string(),
            constraint: Constraint::new(comparison, bound),
        })
    }
}

/// Constraints keyed by color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    constraints: FxHashMap<String, Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard bag of 12 red, 13 green and 14 blue cubes
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with("red", Constraint::at_most(12))
            .with("green", Constraint::at_most(13))
            .with("blue", Constraint::at_most(14))
    }

    /// Add or replace the constraint for a color
    #[must_use]
    pub fn with(mut self, color: impl Into<String>, constraint: Constraint) -> Self {
        self.insert(color, constraint);
        self
    }

    pub fn insert(&mut self, color: impl Into<String>, constraint: Constraint) {
        self.constraints.insert(color.into(), constraint);
    }

    #[must_use]
    pub fn get(&self, color: &str) -> Option<Constraint> {
        self.constraints.get(color).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl FromIterator<ConstraintRule> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = ConstraintRule>>(iter: T) -> Self {
        let mut set = Self::new();
        for rule in iter {
            set.insert(rule.color, rule.constraint);
        }
        set
    }
}

/// Check every cube set of every round against the constraint for its color
///
/// Stops at the first cube set that violates its constraint.
///
/// # Errors
///
/// Returns [`ConstraintError::UnknownColor`] if a cube set reached before any
/// violation has a color missing from `constraints`.
///
/// # Examples
/// ```
/// use aoc2023::core::{STANDARD_CONSTRAINT, parse_game, satisfies_constraints};
///
/// let game = parse_game("Game 3: 8 green, 6 blue, 20 red").unwrap();
/// assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(false));
/// ```
pub fn satisfies_constraints(
    game: &Game,
    constraints: &ConstraintSet,
) -> Result<bool, ConstraintError> {
    for cube_set in game.cube_sets() {
        let constraint = constraints
            .get(&cube_set.color)
            .ok_or_else(|| ConstraintError::UnknownColor(cube_set.color.clone()))?;

        if !constraint.allows(cube_set.count) {
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CubeSet, parse_game};

    #[test]
    fn comparison_holds() {
        assert!(Comparison::LessEqual.holds(12, 12));
        assert!(!Comparison::LessEqual.holds(13, 12));
        assert!(Comparison::GreaterEqual.holds(12, 12));
        assert!(!Comparison::GreaterEqual.holds(11, 12));
        assert!(Comparison::Equal.holds(5, 5));
        assert!(!Comparison::Equal.holds(4, 5));
    }

    #[test]
    fn standard_constraint_bounds() {
        assert_eq!(STANDARD_CONSTRAINT.len(), 3);
        assert_eq!(STANDARD_CONSTRAINT.get("red"), Some(Constraint::at_most(12)));
        assert_eq!(STANDARD_CONSTRAINT.get("green"), Some(Constraint::at_most(13)));
        assert_eq!(STANDARD_CONSTRAINT.get("blue"), Some(Constraint::at_most(14)));
        assert_eq!(STANDARD_CONSTRAINT.get("purple"), None);
    }

    #[test]
    fn valid_game_satisfies_standard() {
        let game = parse_game("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
        assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(true));
    }

    #[test]
    fn boundary_counts_are_allowed() {
        let game = parse_game("Game 1: 12 red, 13 green, 14 blue").unwrap();
        assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(true));
    }

    #[test]
    fn one_bad_round_invalidates_game() {
        let game =
            parse_game("Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red")
                .unwrap();
        assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(false));
    }

    #[test]
    fn unknown_color_is_an_error() {
        let game = parse_game("Game 5: 1 red; 2 purple").unwrap();
        assert_eq!(
            satisfies_constraints(&game, &STANDARD_CONSTRAINT),
            Err(ConstraintError::UnknownColor("purple".to_string()))
        );
    }

    #[test]
    fn violation_short_circuits_before_unknown_color() {
        let game = Game {
            id: 6,
            rounds: vec![vec![CubeSet::new(20, "red")], vec![CubeSet::new(1, "purple")]],
        };
        assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(false));
    }

    #[test]
    fn game_without_cubes_is_valid() {
        let game = Game {
            id: 7,
            rounds: vec![Vec::new()],
        };
        assert_eq!(satisfies_constraints(&game, &ConstraintSet::new()), Ok(true));
    }

    #[test]
    fn custom_constraints() {
        let constraints = ConstraintSet::new()
            .with("red", Constraint::at_least(2))
            .with("blue", Constraint::exactly(3));

        let passing = parse_game("Game 1: 2 red, 3 blue; 9 red").unwrap();
        let failing = parse_game("Game 2: 2 red, 4 blue").unwrap();

        assert_eq!(satisfies_constraints(&passing, &constraints), Ok(true));
        assert_eq!(satisfies_constraints(&failing, &constraints), Ok(false));
    }

    #[test]
    fn parse_constraint_rules() {
        let rule: ConstraintRule = "red<=12".parse().unwrap();
        assert_eq!(rule.color, "red");
        assert_eq!(rule.constraint, Constraint::at_most(12));

        let rule: ConstraintRule = " green >= 3 ".parse().unwrap();
        assert_eq!(rule.color, "green");
        assert_eq!(rule.constraint, Constraint::at_least(3));

        let rule: ConstraintRule = "blue=7".parse().unwrap();
        assert_eq!(rule.constraint, Constraint::exactly(7));
    }

    #[test]
    fn parse_constraint_rule_errors() {
        assert!(matches!(
            "red".parse::<ConstraintRule>(),
            Err(ConstraintParseError::Malformed(_))
        ));
        assert!(matches!(
            "<=12".parse::<ConstraintRule>(),
            Err(ConstraintParseError::Malformed(_))
        ));
        assert!(matches!(
            "red<=many".parse::<ConstraintRule>(),
            Err(ConstraintParseError::InvalidBound(_))
        ));
        assert!(matches!(
            "red<-12".parse::<ConstraintRule>(),
            Err(ConstraintParseError::Malformed(_))
        ));
    }

    #[test]
    fn constraint_set_from_rules() {
        let set: ConstraintSet = ["red<=1", "red<=2", "blue>=3"]
            .into_iter()
            .map(|rule| rule.parse::<ConstraintRule>().unwrap())
            .collect();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("red"), Some(Constraint::at_most(2)));
        assert_eq!(set.get("blue"), Some(Constraint::at_least(3)));
    }

    #[test]
    fn constraint_display() {
        assert_eq!(Constraint::at_most(12).to_string(), "<=12");
        assert_eq!(Constraint::exactly(3).to_string(), "=3");
    }
}
