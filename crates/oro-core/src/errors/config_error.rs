//! Configuration errors.

use super::error_code::{self, OroErrorCode};

/// Failures while resolving an [`OroConfig`](crate::config::OroConfig) from
/// defaults, a TOML file, and `ORO_*` overrides.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("oro config file not found: {path}")]
    FileNotFound { path: String },

    #[error("oro config in {path} is not valid TOML: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid oro config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    /// An environment override parsed but put the config out of range.
    #[error("{var}={value} rejected for {field}: {message}")]
    OverrideRejected {
        var: String,
        value: String,
        field: String,
        message: String,
    },
}

impl OroErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
