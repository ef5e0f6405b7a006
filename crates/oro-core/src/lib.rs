//! # oro-core
//!
//! Foundation crate for the oro belief-tracking models.
//! Defines the belief record shape, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod belief;
pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use belief::{Belief, BeliefConfidence, BeliefLinks, BeliefStatus};
pub use config::OroConfig;
pub use errors::{OroError, OroResult};
