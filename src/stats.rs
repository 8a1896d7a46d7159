//! Summary statistics over repeated selection trials.

// Generation counts are small enough that f64 holds them exactly in practice
#![allow(clippy::cast_precision_loss)]

use serde::Serialize;

/// Generation counts summarized across trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialStats {
    /// Number of trials.
    pub trials: u64,
    /// Arithmetic mean of the generation counts.
    pub mean: f64,
    /// Fewest generations any trial took.
    pub min: u64,
    /// Most generations any trial took.
    pub max: u64,
    /// Population standard deviation of the generation counts.
    pub std_dev: f64,
}

impl TrialStats {
    /// Calculate statistics from the generation count of each trial.
    #[must_use]
    pub fn from_generations<I: IntoIterator<Item = u64>>(generations: I) -> Self {
        let mut accumulator = TrialAccumulator::default();
        for count in generations {
            accumulator.record(count);
        }
        accumulator.finish()
    }
}

/// Running summary of generation counts, updated one trial at a time.
///
/// Memory use is constant in the number of trials; the mean and variance use
/// Welford's online update.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrialAccumulator {
    trials: u64,
    mean: f64,
    sum_sq_dev: f64,
    min: Option<u64>,
    max: Option<u64>,
}

impl TrialAccumulator {
    /// Add one trial's generation count.
    pub fn record(&mut self, count: u64) {
        self.trials += 1;
        let value = count as f64;
        let delta = value - self.mean;
        self.mean += delta / self.trials as f64;
        self.sum_sq_dev += delta * (value - self.mean);
        self.min = Some(self.min.map_or(count, |m| m.min(count)));
        self.max = Some(self.max.map_or(count, |m| m.max(count)));
    }

    /// Number of trials recorded so far.
    #[must_use]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Summarize the recorded trials. No trials yields all zeros.
    #[must_use]
    pub fn finish(&self) -> TrialStats {
        let variance = if self.trials == 0 {
            0.0
        } else {
            self.sum_sq_dev / self.trials as f64
        };

        TrialStats {
            trials: self.trials,
            mean: self.mean,
            min: self.min.unwrap_or(0),
            max: self.max.unwrap_or(0),
            std_dev: variance.sqrt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_stats() {
        let stats = TrialStats::from_generations([10, 20, 30, 40, 50]);

        assert_eq!(stats.trials, 5);
        assert!((stats.mean - 30.0).abs() < 0.001);
        assert_eq!(stats.min, 10);
        assert_eq!(stats.max, 50);
        assert!((stats.std_dev - 200.0_f64.sqrt()).abs() < 0.001);
    }

    #[test]
    fn test_single_trial() {
        let stats = TrialStats::from_generations([7]);
        assert!((stats.mean - 7.0).abs() < 0.001);
        assert!(stats.std_dev.abs() < 0.001);
    }

    #[test]
    fn test_empty() {
        let stats = TrialStats::from_generations(std::iter::empty());
        assert_eq!(stats.trials, 0);
        assert!(stats.mean.abs() < f64::EPSILON);
    }

    #[test]
    fn test_accumulator_matches_batch() {
        let counts = [3u64, 41, 17, 0, 29, 29, 8];

        let mut accumulator = TrialAccumulator::default();
        for &count in &counts {
            accumulator.record(count);
        }
        let online = accumulator.finish();

        let n = counts.len() as f64;
        let mean = counts.iter().map(|&c| c as f64).sum::<f64>() / n;
        let variance = counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / n;

        assert_eq!(accumulator.trials(), 7);
        assert!((online.mean - mean).abs() < 1e-9);
        assert!((online.std_dev - variance.sqrt()).abs() < 1e-9);
        assert_eq!(online.min, 0);
        assert_eq!(online.max, 41);
    }

    #[test]
    fn test_accumulator_constant_counts() {
        let mut accumulator = TrialAccumulator::default();
        for _ in 0..100_000 {
            accumulator.record(12);
        }
        let stats = accumulator.finish();

        assert_eq!(stats.trials, 100_000);
        assert!((stats.mean - 12.0).abs() < 1e-9);
        assert!(stats.std_dev.abs() < 1e-9);
        assert_eq!((stats.min, stats.max), (12, 12));
    }
}
