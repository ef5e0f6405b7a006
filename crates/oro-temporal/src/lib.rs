//! # oro-temporal
//!
//! Temporal reasoning over beliefs: validity windows and supersession chains.
//! Everything here is a pure value or a bounded walk over caller-owned links.

pub mod chain;
pub mod validity;

pub use chain::{BeliefIndex, ChainMember, FnLookup, LinkLookup, SupersessionChain};
pub use validity::TemporalValidity;
