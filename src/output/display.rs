//! Display functions for puzzle answers

use super::formatters::{render_plain, title_rule};
use crate::commands::Answers;
use colored::Colorize;

/// Print both answers, one per line, with no decoration
pub fn print_answers(answers: &Answers) {
    print!("{}", render_plain(answers));
}

/// Print both answers under a colored title
pub fn print_answers_pretty(title: &str, answers: &Answers) {
    println!("\n{}", title_rule(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", title_rule(60).cyan());

    println!(
        "   Part one:  {}",
        answers.part_one.to_string().bright_yellow().bold()
    );
    println!(
        "   Part two:  {}",
        answers.part_two.to_string().bright_yellow().bold()
    );
}
