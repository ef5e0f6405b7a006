use chrono::{DateTime, Utc};

use super::error_code::{self, OroErrorCode};

/// Validity window errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemporalError {
    #[error("invalid validity interval: valid_from {valid_from} is after valid_until {valid_until}")]
    InvalidInterval {
        valid_from: DateTime<Utc>,
        valid_until: DateTime<Utc>,
    },
}

impl OroErrorCode for TemporalError {
    fn error_code(&self) -> &'static str {
        error_code::TEMPORAL_ERROR
    }
}
