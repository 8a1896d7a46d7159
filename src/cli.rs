//! CLI command implementations for Weasel.

pub(crate) mod average;
pub(crate) mod select;

mod output;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use weasel::SelectorConfig;

/// Output format for both commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<weasel::Error> for CliError {
    fn from(e: weasel::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Build a selector configuration from command-line values.
///
/// # Errors
///
/// Returns an error if the mutation rate is not a finite number.
pub(crate) fn selector_config(
    width: usize,
    mutation_rate: f64,
    max_generations: Option<u64>,
) -> Result<SelectorConfig, CliError> {
    if !mutation_rate.is_finite() {
        return Err(weasel::Error::InvalidArgument(format!(
            "mutation rate must be a finite number, got {mutation_rate}"
        ))
        .into());
    }
    if !(0.0..=1.0).contains(&mutation_rate) {
        log::warn!("mutation rate {mutation_rate} is outside [0, 1]");
    }

    Ok(SelectorConfig {
        width,
        mutation_rate,
        max_generations,
    })
}

/// Use the given seed, or derive one from the clock.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
            .unwrap_or(42)
    });
    log::info!("using seed {seed}");
    seed
}
