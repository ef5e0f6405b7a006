pub mod base;
pub mod confidence;
pub mod status;

pub use base::{Belief, BeliefLinks};
pub use confidence::BeliefConfidence;
pub use status::BeliefStatus;
