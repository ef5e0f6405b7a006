//! # oro-freshness
//!
//! Freshness scoring: how much current trust a belief deserves.
//! Factors: confidence, age decay (clamped on expiry), supersession penalty.
//! Expired and superseded beliefs get a status label regardless of score.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod label;

pub use engine::{calculate_freshness, freshness_label, FreshnessScorer};
pub use factors::FreshnessInput;
pub use formula::FreshnessBreakdown;
pub use label::{FreshnessLabel, FreshnessResult};
