use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::BeliefConfidence;
use super::status::BeliefStatus;

/// A recorded claim with a confidence score and a temporal validity window.
///
/// This is the shape handed over by the storage layer. Every timestamp and
/// link is optional; absence is meaningful and never filled with a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Belief {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub confidence: BeliefConfidence,
    /// Hierarchical topic path, e.g. `["work", "rust"]`.
    #[serde(default)]
    pub domain_path: Vec<String>,
    /// Start of validity. `None` means valid since inception.
    pub valid_from: Option<DateTime<Utc>>,
    /// End of validity. `None` means still current.
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub modified_at: Option<DateTime<Utc>>,
    pub source_id: Option<String>,
    pub extraction_method: Option<String>,
    /// ID of the older belief this one replaces.
    pub supersedes_id: Option<String>,
    /// ID of the newer belief that replaced this one.
    pub superseded_by_id: Option<String>,
    #[serde(default)]
    pub status: BeliefStatus,
}

/// The supersession pointer pair of a single belief.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeliefLinks {
    pub supersedes_id: Option<String>,
    pub superseded_by_id: Option<String>,
}

impl BeliefLinks {
    pub fn new(supersedes_id: Option<&str>, superseded_by_id: Option<&str>) -> Self {
        Self {
            supersedes_id: supersedes_id.map(str::to_string),
            superseded_by_id: superseded_by_id.map(str::to_string),
        }
    }
}

impl Belief {
    /// A fresh, active belief created and modified at `now`.
    pub fn new(id: impl Into<String>, content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            confidence: BeliefConfidence::default(),
            domain_path: Vec::new(),
            valid_from: None,
            valid_until: None,
            created_at: Some(now),
            modified_at: Some(now),
            source_id: None,
            extraction_method: None,
            supersedes_id: None,
            superseded_by_id: None,
            status: BeliefStatus::Active,
        }
    }

    pub fn links(&self) -> BeliefLinks {
        BeliefLinks {
            supersedes_id: self.supersedes_id.clone(),
            superseded_by_id: self.superseded_by_id.clone(),
        }
    }

    /// Timestamp age is measured from: `modified_at`, else `created_at`.
    pub fn age_basis(&self) -> Option<DateTime<Utc>> {
        self.modified_at.or(self.created_at)
    }

    pub fn has_successor(&self) -> bool {
        self.superseded_by_id.is_some()
    }

    /// Superseded by pointer or by status, whichever the record carries.
    pub fn is_marked_superseded(&self) -> bool {
        self.has_successor() || self.status == BeliefStatus::Superseded
    }
}
