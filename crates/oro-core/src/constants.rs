/// Seconds per day, used for age computations.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Environment variable consulted for log filtering.
pub const LOG_ENV_VAR: &str = "ORO_LOG";
