//! Advent of Code 2023 - CLI
//!
//! Prints the part one and part two answers for each requested day, one per line.

use aoc2023::{
    commands::{Answers, day1, day2},
    core::{ConstraintRule, ConstraintSet},
    fixtures::{Fixtures, actual},
    logging::init_logger,
    output::{print_answers, print_answers_pretty},
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "aoc2023",
    about = "Advent of Code 2023: trebuchet calibration and cube conundrum",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding `actual/<day>.txt` puzzle inputs
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Print answers with titles and color
    #[arg(long, global = true)]
    pretty: bool,

    /// Log every parsed line to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve both days (default)
    All,

    /// Day 1: Trebuchet?!
    Day1 {
        /// Read this file instead of the day 1 puzzle input
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Day 2: Cube Conundrum
    Day2 {
        /// Read this file instead of the day 2 puzzle input
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Replace the standard bag with rules like `red<=12` (repeatable)
        #[arg(short, long = "constraint")]
        constraints: Vec<ConstraintRule>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let fixtures = cli.fixtures.map_or_else(Fixtures::default, Fixtures::new);
    let command = cli.command.unwrap_or(Commands::All);

    match command {
        Commands::All => {
            run_day1(&fixtures, None, cli.pretty)?;
            run_day2(&fixtures, None, Vec::new(), cli.pretty)
        }
        Commands::Day1 { input } => run_day1(&fixtures, input, cli.pretty),
        Commands::Day2 { input, constraints } => {
            run_day2(&fixtures, input, constraints, cli.pretty)
        }
    }
}

fn run_day1(fixtures: &Fixtures, input: Option<PathBuf>, pretty: bool) -> Result<()> {
    let path = input.unwrap_or_else(|| fixtures.path(actual(1)));
    let answers = day1::solve(&path)?;
    report("Day 1: Trebuchet?!", &answers, pretty);
    Ok(())
}

fn run_day2(
    fixtures: &Fixtures,
    input: Option<PathBuf>,
    rules: Vec<ConstraintRule>,
    pretty: bool,
) -> Result<()> {
    let path = input.unwrap_or_else(|| fixtures.path(actual(2)));
    let constraints = if rules.is_empty() {
        ConstraintSet::standard()
    } else {
        rules.into_iter().collect()
    };

    let answers = day2::solve(&path, &constraints)?;
    report("Day 2: Cube Conundrum", &answers, pretty);
    Ok(())
}

fn report(title: &str, answers: &Answers, pretty: bool) {
    if pretty {
        print_answers_pretty(title, answers);
    } else {
        print_answers(answers);
    }
}
