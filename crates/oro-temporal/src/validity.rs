//! Validity windows: when a belief is considered true.
//!
//! Both bounds are inclusive. A missing `valid_from` means "since inception",
//! a missing `valid_until` means "still current".

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use oro_core::belief::Belief;
use oro_core::errors::TemporalError;

/// An immutable, possibly open-ended validity interval.
///
/// Construction enforces `valid_from <= valid_until` when both are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawValidity")]
pub struct TemporalValidity {
    valid_from: Option<DateTime<Utc>>,
    valid_until: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawValidity {
    valid_from: Option<DateTime<Utc>>,
    valid_until: Option<DateTime<Utc>>,
}

impl TryFrom<RawValidity> for TemporalValidity {
    type Error = TemporalError;

    fn try_from(raw: RawValidity) -> Result<Self, Self::Error> {
        Self::new(raw.valid_from, raw.valid_until)
    }
}

impl TemporalValidity {
    pub fn new(
        valid_from: Option<DateTime<Utc>>,
        valid_until: Option<DateTime<Utc>>,
    ) -> Result<Self, TemporalError> {
        if let (Some(from), Some(until)) = (valid_from, valid_until) {
            if from > until {
                return Err(TemporalError::InvalidInterval {
                    valid_from: from,
                    valid_until: until,
                });
            }
        }
        Ok(Self {
            valid_from,
            valid_until,
        })
    }

    /// Valid for all time.
    pub fn open() -> Self {
        Self::default()
    }

    /// Valid from `from` onwards, with no end.
    pub fn starting(from: DateTime<Utc>) -> Self {
        Self {
            valid_from: Some(from),
            valid_until: None,
        }
    }

    /// Valid from inception up to and including `until`.
    pub fn until(until: DateTime<Utc>) -> Self {
        Self {
            valid_from: None,
            valid_until: Some(until),
        }
    }

    /// Read the validity window off a belief record.
    pub fn from_belief(belief: &Belief) -> Result<Self, TemporalError> {
        Self::new(belief.valid_from, belief.valid_until)
    }

    pub fn valid_from(&self) -> Option<DateTime<Utc>> {
        self.valid_from
    }

    pub fn valid_until(&self) -> Option<DateTime<Utc>> {
        self.valid_until
    }

    /// A copy of this window closed at `until`. `self` is left untouched.
    pub fn with_until(&self, until: DateTime<Utc>) -> Result<Self, TemporalError> {
        Self::new(self.valid_from, Some(until))
    }

    pub fn is_valid_at(&self, instant: DateTime<Utc>) -> bool {
        self.valid_from.map_or(true, |from| instant >= from)
            && self.valid_until.map_or(true, |until| instant <= until)
    }

    /// Reads the system clock. Prefer [`Self::is_valid_at`] where `now` is known.
    pub fn is_currently_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.valid_until.is_some_and(|until| now > until)
    }

    /// Not yet in effect at `now`.
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        self.valid_from.is_some_and(|from| now < from)
    }

    pub fn is_open_ended(&self) -> bool {
        self.valid_until.is_none()
    }

    /// Length of a closed interval; `None` if either bound is open.
    pub fn duration(&self) -> Option<Duration> {
        match (self.valid_from, self.valid_until) {
            (Some(from), Some(until)) => Some(until - from),
            _ => None,
        }
    }
}
