// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Weasel: cumulative selection on letter phrases.
//!
//! Starting from a random string of letters, each generation breeds a litter
//! of imperfect copies of the current phrase and keeps the one closest to a
//! goal. Selection pressure reaches the goal in a handful of generations where
//! pure random search would need astronomically many attempts.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     Selector (generation loop)      │
//! ├─────────────────────────────────────┤
//! │  Reproduction │  Mean squared error │
//! ├─────────────────────────────────────┤
//! │   Phrase (uppercase letter vector)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! Randomness is always supplied by the caller as a [`rand::Rng`], so a
//! seeded generator makes every run reproducible.

pub mod clamp;
pub mod error;
pub mod phrase;
pub mod selector;
pub mod stats;

pub use clamp::clamp;
pub use error::{Error, Result};
pub use phrase::Phrase;
pub use selector::{Generation, Selector, SelectorConfig};
pub use stats::{TrialAccumulator, TrialStats};
