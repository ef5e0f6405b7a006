// Single source of truth for all default values.

// --- Freshness ---
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 30.0;
pub const DEFAULT_SUPERSESSION_PENALTY: f64 = 0.3;
pub const DEFAULT_EXPIRED_DECAY: f64 = 0.01;
pub const DEFAULT_FRESH_THRESHOLD: f64 = 0.7;
pub const DEFAULT_AGING_THRESHOLD: f64 = 0.4;

// --- Supersession chains ---
pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 1000;

// --- Beliefs ---
pub const DEFAULT_OVERALL_CONFIDENCE: f64 = 0.7;

// --- Logging ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
