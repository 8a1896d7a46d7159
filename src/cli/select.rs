//! Single-run command implementation.

use super::output::{JsonGeneration, JsonSelectResult};
use super::{CliError, OutputFormat, resolve_seed};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use weasel::{Selector, SelectorConfig};

/// Execute a single selection run.
///
/// Text output prints each generation's phrase and error, then the number
/// of generations taken.
///
/// # Errors
///
/// Returns an error if selection fails.
pub(crate) fn execute(
    phrase: &str,
    config: SelectorConfig,
    seed: Option<u64>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let selector = Selector::from_config(phrase, config);
    if !selector.goal().is_valid() {
        log::warn!("goal {} contains non-letters and can never be reached", selector.goal());
    }

    let mut rng = SmallRng::seed_from_u64(seed);

    match format {
        OutputFormat::Text => {
            let generations = selector.select_with(&mut rng, |generation| {
                if !quiet {
                    println!("{generation}");
                }
            })?;
            println!("{generations}");
        }
        OutputFormat::Json => {
            let mut lineage = Vec::new();
            let generations = selector.select_with(&mut rng, |generation| {
                if !quiet {
                    lineage.push(JsonGeneration::from(generation));
                }
            })?;
            let result = JsonSelectResult::new(&selector, seed, generations, lineage);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
