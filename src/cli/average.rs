//! Averaging command implementation.

use super::output::{JsonAverageResult, format_mean};
use super::{CliError, OutputFormat, resolve_seed};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;
use weasel::{Selector, SelectorConfig};

/// Execute the averaging command.
///
/// # Errors
///
/// Returns an error if any trial fails.
pub(crate) fn execute(
    phrase: &str,
    config: SelectorConfig,
    trials: u64,
    seed: Option<u64>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let selector = Selector::from_config(phrase, config);
    let mut rng = SmallRng::seed_from_u64(seed);

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(trials);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = selector.run_trials(&mut rng, trials, |_, _| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    let stats = stats?;
    log::info!("{trials} trials in {:.2}s", start.elapsed().as_secs_f64());

    match format {
        OutputFormat::Text => println!("{}", format_mean(stats.mean)),
        OutputFormat::Json => {
            let result = JsonAverageResult::new(&selector, seed, stats);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
