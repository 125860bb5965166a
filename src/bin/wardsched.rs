//! Command-line entry point: load a problem descriptor, run the beam
//! search, and print the result.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use wardsched::error::WardSchedError;
use wardsched::input::load_problem;
use wardsched::report::{render, Format};

#[derive(Parser)]
#[command(name = "wardsched", about = "Beam-search staff allocation for a ward's workday")]
struct Cli {
    /// Path to the problem descriptor (JSON).
    input: PathBuf,

    /// Overrides the descriptor's beam width.
    #[arg(long)]
    beam_width: Option<usize>,

    /// Overrides the descriptor's random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Output layout.
    #[arg(long, value_enum, default_value = "task")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Task,
    Block,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut problem = match load_problem(&cli.input) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    if let Some(width) = cli.beam_width {
        problem.config.beam_width = width;
    }
    if let Some(seed) = cli.seed {
        problem.config.random_seed = seed;
    }
    if let Err(e) = problem.validate() {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    match wardsched::run(&problem) {
        Ok(outcome) => {
            let format = match cli.format {
                OutputFormat::Task => Format::Task,
                OutputFormat::Block => Format::Block,
            };
            print!("{}", render(&problem, &outcome.assignment, format));
            ExitCode::SUCCESS
        }
        Err(e @ WardSchedError::NoFeasibleAssignment { .. }) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
