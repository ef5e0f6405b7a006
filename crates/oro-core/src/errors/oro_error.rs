use super::error_code::{self, OroErrorCode};
use super::{ChainError, ConfigError, FreshnessError, TemporalError};

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum OroError {
    #[error("temporal error: {0}")]
    TemporalError(#[from] TemporalError),

    #[error("chain error: {0}")]
    ChainError(#[from] ChainError),

    #[error("freshness error: {0}")]
    FreshnessError(#[from] FreshnessError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("invalid belief status: {name}")]
    InvalidStatus { name: String },

    /// Raised by caller-supplied link lookups (e.g. a failed batch query).
    #[error("link lookup failed for {id}: {reason}")]
    LookupFailed { id: String, reason: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type OroResult<T> = Result<T, OroError>;

impl OroErrorCode for OroError {
    fn error_code(&self) -> &'static str {
        match self {
            OroError::TemporalError(e) => e.error_code(),
            OroError::ChainError(e) => e.error_code(),
            OroError::FreshnessError(e) => e.error_code(),
            OroError::ConfigError(e) => e.error_code(),
            OroError::InvalidStatus { .. } => error_code::INVALID_STATUS,
            OroError::LookupFailed { .. } => error_code::LOOKUP_FAILED,
            OroError::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
