//! Output formatting utilities for CLI.

use serde::Serialize;
use weasel::{Generation, Phrase, Selector, SelectorConfig, TrialStats};

/// JSON-serializable generation record.
#[derive(Debug, Serialize)]
pub(super) struct JsonGeneration {
    /// Generation number.
    pub(super) generation: u64,
    /// Phrase chosen as parent.
    pub(super) phrase: String,
    /// Mean squared error against the goal.
    pub(super) error: f64,
}

impl From<&Generation<'_>> for JsonGeneration {
    fn from(generation: &Generation<'_>) -> Self {
        Self {
            generation: generation.number,
            phrase: generation.phrase.to_string(),
            error: generation.error,
        }
    }
}

/// JSON-serializable single run.
#[derive(Debug, Serialize)]
pub(super) struct JsonSelectResult<'a> {
    /// Goal phrase.
    pub(super) goal: &'a Phrase,
    /// Random seed used.
    pub(super) seed: u64,
    /// Width, mutation rate and generation limit.
    #[serde(flatten)]
    pub(super) config: SelectorConfig,
    /// Generations taken to reach the goal.
    pub(super) generations: u64,
    /// Phrase chosen in each generation (empty when quiet).
    pub(super) lineage: Vec<JsonGeneration>,
}

impl<'a> JsonSelectResult<'a> {
    /// Create from a finished run.
    pub(super) fn new(
        selector: &'a Selector,
        seed: u64,
        generations: u64,
        lineage: Vec<JsonGeneration>,
    ) -> Self {
        Self {
            goal: selector.goal(),
            seed,
            config: *selector.config(),
            generations,
            lineage,
        }
    }
}

/// JSON-serializable averaged run.
#[derive(Debug, Serialize)]
pub(super) struct JsonAverageResult<'a> {
    /// Goal phrase.
    pub(super) goal: &'a Phrase,
    /// Random seed used.
    pub(super) seed: u64,
    /// Width, mutation rate and generation limit.
    #[serde(flatten)]
    pub(super) config: SelectorConfig,
    /// Generation count statistics.
    #[serde(flatten)]
    pub(super) stats: TrialStats,
}

impl<'a> JsonAverageResult<'a> {
    /// Create from trial statistics.
    pub(super) fn new(selector: &'a Selector, seed: u64, stats: TrialStats) -> Self {
        Self {
            goal: selector.goal(),
            seed,
            config: *selector.config(),
            stats,
        }
    }
}

/// Format a mean generation count so it always reads as a float.
pub(super) fn format_mean(mean: f64) -> String {
    format!("{mean:?}")
}
