//! Error types for cumulative selection.

use thiserror::Error;

/// Errors surfaced by the selection engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `average` was asked for zero trials.
    #[error("invalid trial count: at least one trial is required")]
    InvalidTrials,

    /// A litter of width zero cannot produce a parent for a non-empty goal.
    #[error("litter width is 0 but the goal has {goal_len} letters")]
    EmptyLitter {
        /// Length of the goal phrase.
        goal_len: usize,
    },

    /// The configured generation limit was reached before the goal.
    #[error("goal not reached within {limit} generations")]
    GenerationLimit {
        /// The limit that was hit.
        limit: u64,
    },

    /// Malformed input supplied by a caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for selection operations.
pub type Result<T> = std::result::Result<T, Error>;
