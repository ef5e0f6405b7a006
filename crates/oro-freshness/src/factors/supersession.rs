use oro_core::config::FreshnessConfig;

/// Supersession multiplier: the configured penalty when a newer belief
/// replaced this one, 1.0 otherwise.
pub fn calculate(superseded: bool, config: &FreshnessConfig) -> f64 {
    if superseded {
        config.supersession_penalty
    } else {
        1.0
    }
}
