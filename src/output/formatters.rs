//! Formatting utilities for terminal output

use crate::commands::Answers;

/// Both answers as two newline-terminated lines
#[must_use]
pub fn render_plain(answers: &Answers) -> String {
    format!("{}\n{}\n", answers.part_one, answers.part_two)
}

/// A horizontal rule used around titles
#[must_use]
pub fn title_rule(width: usize) -> String {
    "═".repeat(width)
}
