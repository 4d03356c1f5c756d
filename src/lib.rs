//! Advent of Code 2023
//!
//! Solutions for day 1 (Trebuchet?!) and day 2 (Cube Conundrum).
//!
//! # Quick Start
//!
//! ```rust
//! use aoc2023::core::{STANDARD_CONSTRAINT, find_calibration_value, parse_game, power,
//!     satisfies_constraints, translate_word_digits};
//!
//! let value = find_calibration_value(&translate_word_digits("eightwothree")).unwrap();
//! assert_eq!(value, 83);
//!
//! let game = parse_game("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
//! assert_eq!(satisfies_constraints(&game, &STANDARD_CONSTRAINT), Ok(true));
//! assert_eq!(power(&game), Ok(48));
//! ```

// Core parsing and evaluation
pub mod core;

// Puzzle input files
pub mod fixtures;

// Per-day solutions
pub mod commands;

// Terminal output formatting
pub mod output;

// Tracing subscriber setup
pub mod logging;
