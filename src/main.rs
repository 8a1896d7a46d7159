//! Weasel CLI - run cumulative selection from the command line.
//!
//! With three arguments a single run prints the phrase chosen in each
//! generation followed by the generation count. With a fourth argument the
//! selection is repeated that many times and the mean generation count is
//! printed instead.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::Parser;
use std::process::ExitCode;

/// Weasel - cumulative selection on letter phrases
#[derive(Parser, Debug)]
#[command(name = "weasel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Goal phrase (upper-cased before use)
    phrase: String,

    /// Number of offspring per generation
    #[arg(allow_negative_numbers = true)]
    width: usize,

    /// Probability of miscopying each letter, on [0, 1]
    #[arg(value_name = "P", allow_negative_numbers = true)]
    mutation_rate: f64,

    /// Average over N trials instead of a single verbose run
    #[arg(
        value_name = "N",
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    trials: Option<u64>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: cli::OutputFormat,

    /// Suppress generation-by-generation output
    #[arg(short, long)]
    quiet: bool,

    /// Show a progress bar while averaging
    #[arg(short, long)]
    progress: bool,

    /// Give up after this many generations (default: no limit)
    #[arg(short, long)]
    max_generations: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let result = cli::selector_config(args.width, args.mutation_rate, args.max_generations)
        .and_then(|config| match args.trials {
            None => cli::select::execute(&args.phrase, config, args.seed, args.format, args.quiet),
            Some(trials) => cli::average::execute(
                &args.phrase,
                config,
                trials,
                args.seed,
                args.format,
                args.progress,
            ),
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
