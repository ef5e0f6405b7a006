use oro_core::config::FreshnessConfig;
use serde::{Deserialize, Serialize};

use crate::factors::{self, FreshnessInput};

/// Multiplicative freshness formula.
///
/// ```text
/// score = confidence
///   × decay          (age decay, clamped to expired_decay once expired)
///   × penalty        (supersession_penalty if superseded, else 1.0)
/// ```
///
/// Result is clamped to [0.0, 1.0].
pub fn compute(input: &FreshnessInput, config: &FreshnessConfig) -> f64 {
    compute_breakdown(input, config).score
}

/// Each factor of a freshness score, for debugging and display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreshnessBreakdown {
    pub base_confidence: f64,
    pub age_days: f64,
    /// Age decay before the expiry clamp.
    pub age_decay: f64,
    /// Decay actually applied (after the expiry clamp).
    pub decay: f64,
    pub penalty: f64,
    pub expired: bool,
    pub superseded: bool,
    pub score: f64,
}

/// Compute the score with a full breakdown of each factor.
pub fn compute_breakdown(input: &FreshnessInput, config: &FreshnessConfig) -> FreshnessBreakdown {
    let age_decay = factors::age::calculate(input.age_days, config);
    let decay = factors::expiry::calculate(age_decay, input.expired, config);
    let penalty = factors::supersession::calculate(input.superseded, config);

    let score = (input.confidence * decay * penalty).clamp(0.0, 1.0);

    FreshnessBreakdown {
        base_confidence: input.confidence,
        age_days: input.age_days,
        age_decay,
        decay,
        penalty,
        expired: input.expired,
        superseded: input.superseded,
        score,
    }
}
