//! Stable machine-readable codes for every error family.

pub const TEMPORAL_ERROR: &str = "TEMPORAL_ERROR";
pub const CHAIN_ERROR: &str = "CHAIN_ERROR";
pub const FRESHNESS_ERROR: &str = "FRESHNESS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INVALID_STATUS: &str = "INVALID_STATUS";
pub const LOOKUP_FAILED: &str = "LOOKUP_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Implemented by every error type so callers can branch on a code
/// instead of matching message text.
pub trait OroErrorCode {
    fn error_code(&self) -> &'static str;
}
