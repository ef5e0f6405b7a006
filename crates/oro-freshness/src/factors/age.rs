use chrono::{DateTime, Utc};

use oro_core::config::{DecayCurve, FreshnessConfig};
use oro_core::constants::SECONDS_PER_DAY;

/// Smallest decay factor ever returned. Keeps very old beliefs strictly
/// positive so scores remain orderable.
pub const MIN_AGE_DECAY: f64 = f64::MIN_POSITIVE;

/// Whole-second age in days. Timestamps in the future count as age zero.
pub fn age_days(basis: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - basis).num_seconds().max(0) as f64 / SECONDS_PER_DAY
}

/// Age decay factor in (0.0, 1.0]: 1.0 at age zero, 0.5 at one half-life.
pub fn calculate(age_days: f64, config: &FreshnessConfig) -> f64 {
    let half_lives = age_days.max(0.0) / config.half_life_days;
    let factor = match config.decay_curve {
        DecayCurve::Exponential => (-half_lives * std::f64::consts::LN_2).exp(),
        DecayCurve::Hyperbolic => 1.0 / (1.0 + half_lives),
    };
    factor.clamp(MIN_AGE_DECAY, 1.0)
}
