pub mod age;
pub mod expiry;
pub mod supersession;

/// Everything the formula needs about one belief, already validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreshnessInput {
    /// `confidence.overall`, within [0.0, 1.0].
    pub confidence: f64,
    /// Days since the belief was last modified; never negative.
    pub age_days: f64,
    /// `now` is past the belief's `valid_until`.
    pub expired: bool,
    /// A newer belief replaced this one.
    pub superseded: bool,
}
