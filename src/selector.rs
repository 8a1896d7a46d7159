//! Cumulative selection loop.
//!
//! A selector starts from a random phrase and, each generation, breeds a
//! litter of imperfect copies of the current parent. The copy closest to the
//! goal (lowest mean squared error) becomes the next parent. The loop ends
//! when the parent matches the goal exactly.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use weasel::Selector;
//!
//! let selector = Selector::new("weasel", 100, 0.05);
//! let mut rng = SmallRng::seed_from_u64(42);
//! let generations = selector.select(&mut rng)?;
//! assert!(generations > 0);
//! # Ok::<(), weasel::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::phrase::Phrase;
use crate::stats::{TrialAccumulator, TrialStats};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Configuration for a selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Number of offspring per litter.
    pub width: usize,
    /// Probability that any one letter is miscopied during reproduction.
    pub mutation_rate: f64,
    /// Give up after this many generations. `None` runs until the goal is
    /// reached, which never happens with a zero mutation rate and an unlucky
    /// starting phrase.
    pub max_generations: Option<u64>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            width: 100,
            mutation_rate: 0.05,
            max_generations: None,
        }
    }
}

/// The fittest offspring chosen in one generation.
#[derive(Debug, Clone, Copy)]
pub struct Generation<'a> {
    /// Generation number, starting at 1.
    pub number: u64,
    /// The phrase chosen as the next parent.
    pub phrase: &'a Phrase,
    /// Its mean squared error against the goal.
    pub error: f64,
}

impl fmt::Display for Generation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.8})", self.phrase, self.error)
    }
}

/// Performs cumulative selection towards a goal phrase.
#[derive(Debug, Clone)]
pub struct Selector {
    goal: Phrase,
    config: SelectorConfig,
}

impl Selector {
    /// Create a selector with a goal string, a litter `width`, and a
    /// per-letter `mutation_rate`.
    #[must_use]
    pub fn new(goal: &str, width: usize, mutation_rate: f64) -> Self {
        Self::from_config(
            goal,
            SelectorConfig {
                width,
                mutation_rate,
                ..SelectorConfig::default()
            },
        )
    }

    /// Create a selector from a full configuration.
    #[must_use]
    pub fn from_config(goal: &str, config: SelectorConfig) -> Self {
        Self {
            goal: Phrase::from_text(goal),
            config,
        }
    }

    /// Limit the number of generations a single run may take.
    #[must_use]
    pub fn with_max_generations(mut self, limit: u64) -> Self {
        self.config.max_generations = Some(limit);
        self
    }

    /// The goal phrase.
    #[must_use]
    pub fn goal(&self) -> &Phrase {
        &self.goal
    }

    /// The selector's configuration.
    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Number of generations needed to reach the goal from a random phrase.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyLitter`] if the width is zero and the goal is not
    /// empty, and [`Error::GenerationLimit`] if a configured limit is reached.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<u64> {
        self.select_with(rng, |_| {})
    }

    /// Like [`Selector::select`], reporting the phrase chosen in each
    /// generation to `observe`.
    ///
    /// # Errors
    ///
    /// Same as [`Selector::select`].
    pub fn select_with<R, F>(&self, rng: &mut R, mut observe: F) -> Result<u64>
    where
        R: Rng + ?Sized,
        F: FnMut(&Generation<'_>),
    {
        let goal_len = self.goal.len();
        if self.config.width == 0 && goal_len > 0 {
            return Err(Error::EmptyLitter { goal_len });
        }

        let mut generation = 0u64;
        let mut parent = Phrase::random(rng, goal_len);

        while parent != self.goal {
            if let Some(limit) = self
                .config
                .max_generations
                .filter(|&limit| generation >= limit)
            {
                log::warn!("giving up on {} after {limit} generations", self.goal);
                return Err(Error::GenerationLimit { limit });
            }

            let (child, error) = (0..self.config.width)
                .map(|_| {
                    let child = parent.reproduce(self.config.mutation_rate, rng);
                    let error = child.mean_squared_error(&self.goal);
                    (child, error)
                })
                .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
                .ok_or(Error::EmptyLitter { goal_len })?;

            parent = child;
            generation += 1;

            let chosen = Generation {
                number: generation,
                phrase: &parent,
                error,
            };
            log::trace!("gen {generation:>5}: {chosen}");
            observe(&chosen);
        }

        log::debug!("reached {} in {generation} generations", self.goal);
        Ok(generation)
    }

    /// Average number of generations selection takes over `trials` runs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTrials`] if `trials` is zero, or any error
    /// from [`Selector::select`].
    pub fn average<R: Rng + ?Sized>(&self, rng: &mut R, trials: u64) -> Result<f64> {
        Ok(self.run_trials(rng, trials, |_, _| {})?.mean)
    }

    /// Run `trials` independent selections and summarize them.
    ///
    /// `on_trial` receives the zero-based trial index and its generation count
    /// after each run.
    ///
    /// # Errors
    ///
    /// Same as [`Selector::average`].
    pub fn run_trials<R, F>(
        &self,
        rng: &mut R,
        trials: u64,
        mut on_trial: F,
    ) -> Result<TrialStats>
    where
        R: Rng + ?Sized,
        F: FnMut(u64, u64),
    {
        if trials == 0 {
            return Err(Error::InvalidTrials);
        }

        let mut accumulator = TrialAccumulator::default();
        for trial in 0..trials {
            let count = self.select(rng)?;
            log::trace!("trial {trial}: {count} generations");
            on_trial(trial, count);
            accumulator.record(count);
        }

        let stats = accumulator.finish();
        log::info!(
            "{} trials: mean={:.2} min={} max={} std={:.2}",
            stats.trials,
            stats.mean,
            stats.min,
            stats.max,
            stats.std_dev
        );
        Ok(stats)
    }
}
