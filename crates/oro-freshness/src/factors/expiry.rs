use oro_core::config::FreshnessConfig;

/// Decay contribution after applying the expiry clamp.
///
/// Expired beliefs never contribute more than `expired_decay`; unexpired
/// beliefs keep their age decay untouched.
pub fn calculate(age_decay: f64, expired: bool, config: &FreshnessConfig) -> f64 {
    if expired {
        age_decay.min(config.expired_decay)
    } else {
        age_decay
    }
}
