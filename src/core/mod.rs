//! Core puzzle logic
//!
//! Pure per-line parsing and evaluation. Nothing here performs I/O; the
//! aggregators in [`crate::commands`] feed lines in and sum the results.

mod calibration;
mod constraint;
mod game;

pub use calibration::{CalibrationError, find_calibration_value, translate_word_digits};
pub use constraint::{
    Comparison, Constraint, ConstraintError, ConstraintParseError, ConstraintRule, ConstraintSet,
    STANDARD_CONSTRAINT, satisfies_constraints,
};
pub use game::{CubeSet, Game, GameParseError, PowerOverflow, parse_game, power};
