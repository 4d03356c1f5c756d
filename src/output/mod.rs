//! Terminal output formatting
//!
//! Plain output is exactly two integers per puzzle; `--pretty` adds color and titles.

pub mod display;
pub mod formatters;

pub use display::{print_answers, print_answers_pretty};
