//! Error handling for the oro models.
//! One error enum per subsystem, `thiserror` only, aggregated into [`OroError`].

pub mod chain_error;
pub mod config_error;
pub mod error_code;
pub mod freshness_error;
pub mod oro_error;
pub mod temporal_error;

pub use chain_error::ChainError;
pub use config_error::ConfigError;
pub use error_code::OroErrorCode;
pub use freshness_error::FreshnessError;
pub use oro_error::{OroError, OroResult};
pub use temporal_error::TemporalError;
