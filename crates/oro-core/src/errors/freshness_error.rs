use super::error_code::{self, OroErrorCode};

/// Freshness scoring errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FreshnessError {
    #[error("invalid confidence: overall {value} is outside [0.0, 1.0]")]
    InvalidConfidence { value: f64 },

    #[error("belief {id} has neither created_at nor modified_at")]
    MissingTimestamp { id: String },
}

impl OroErrorCode for FreshnessError {
    fn error_code(&self) -> &'static str {
        error_code::FRESHNESS_ERROR
    }
}
