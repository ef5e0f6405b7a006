use serde::{Deserialize, Serialize};

use super::defaults;
use super::oro_config::invalid;
use crate::errors::ConfigError;

/// Shape of the age-decay curve.
///
/// Both curves equal 1.0 at age zero, 0.5 at one half-life, and approach
/// zero asymptotically without reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecayCurve {
    /// `2^(-age / half_life)`
    #[default]
    Exponential,
    /// `1 / (1 + age / half_life)`; slower long tail than exponential.
    Hyperbolic,
}

/// Score boundaries for the numeric freshness tiers.
///
/// `score >= fresh` is fresh, `score >= aging` is aging, anything lower is stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelThresholds {
    pub fresh: f64,
    pub aging: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            fresh: defaults::DEFAULT_FRESH_THRESHOLD,
            aging: defaults::DEFAULT_AGING_THRESHOLD,
        }
    }
}

/// Freshness scoring configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Age (days) at which the decay factor reaches 0.5.
    pub half_life_days: f64,
    pub decay_curve: DecayCurve,
    /// Multiplier applied to beliefs that a newer belief superseded.
    pub supersession_penalty: f64,
    /// Decay contribution used for beliefs past `valid_until`.
    pub expired_decay: f64,
    pub thresholds: LabelThresholds,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            decay_curve: DecayCurve::default(),
            supersession_penalty: defaults::DEFAULT_SUPERSESSION_PENALTY,
            expired_decay: defaults::DEFAULT_EXPIRED_DECAY,
            thresholds: LabelThresholds::default(),
        }
    }
}

impl FreshnessConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.half_life_days.is_finite() || self.half_life_days <= 0.0 {
            return Err(invalid(
                "freshness.half_life_days",
                "must be a positive number",
            ));
        }
        if !(self.supersession_penalty > 0.0 && self.supersession_penalty < 1.0) {
            return Err(invalid(
                "freshness.supersession_penalty",
                "must be strictly between 0.0 and 1.0",
            ));
        }
        if !(0.0..1.0).contains(&self.expired_decay) {
            return Err(invalid("freshness.expired_decay", "must be in [0.0, 1.0)"));
        }
        let t = &self.thresholds;
        if !(t.aging > 0.0 && t.aging < t.fresh && t.fresh <= 1.0) {
            return Err(invalid(
                "freshness.thresholds",
                "must satisfy 0.0 < aging < fresh <= 1.0",
            ));
        }
        Ok(())
    }
}
