//! Command-line front end for the puzzle calendar.
//!
//! # Usage
//!
//! ```sh
//! advent list
//! advent solve 1 7
//! advent solve --all
//! advent --inputs ./inputs solve --all
//! ```
//!
//! Without `--inputs` the bundled sample inputs are used. With it, the input
//! named `day1` is read from `<DIR>/day1.txt`, and so on.
//!
//! Log output is controlled with `RUST_LOG` (default: `warn`).

use std::path::PathBuf;

use advent_solver::{
    Calendar, PuzzleId,
    input::{BundledInputs, DirectoryInputs},
};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

mod version;

#[derive(Debug, Parser)]
#[command(author, version = version::long_version(), about)]
struct Args {
    /// Directory to read puzzle inputs from instead of the bundled samples.
    #[arg(long, value_name = "DIR", global = true)]
    inputs: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every registered puzzle with its number and input name.
    List,
    /// Solve puzzles and print their answers.
    Solve {
        /// Puzzle numbers to solve.
        #[arg(value_name = "ID", required_unless_present = "all", conflicts_with = "all")]
        ids: Vec<PuzzleId>,

        /// Solve every registered puzzle.
        #[arg(long)]
        all: bool,
    },
}

fn build_calendar(inputs: Option<PathBuf>) -> Calendar {
    match inputs {
        Some(dir) => {
            log::info!("reading inputs from {}", dir.display());
            Calendar::with_all_puzzles(DirectoryInputs::new(dir))
        }
        None => {
            log::info!("using bundled sample inputs");
            Calendar::with_all_puzzles(BundledInputs::new())
        }
    }
}

fn list(calendar: &Calendar) {
    for (id, puzzle) in calendar.puzzles() {
        println!("{id:>3}  {:<32} {}", puzzle.name(), puzzle.input_name());
    }
}

fn solve(calendar: &Calendar, ids: &[PuzzleId]) {
    let answers: Vec<String> = ids.par_iter().map(|&id| calendar.solve(id)).collect();
    for (id, answer) in ids.iter().zip(answers) {
        println!("Problem {id}: {answer}");
    }
}

fn main() {
    better_panic::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let calendar = build_calendar(args.inputs);

    match args.command {
        Command::List => list(&calendar),
        Command::Solve { ids, all } => {
            let ids: Vec<PuzzleId> = if all {
                calendar.puzzles().map(|(id, _)| id).collect()
            } else {
                ids
            };
            solve(&calendar, &ids);
        }
    }
}
