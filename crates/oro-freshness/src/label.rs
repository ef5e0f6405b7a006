use std::fmt;

use oro_core::config::LabelThresholds;
use serde::{Deserialize, Serialize};

/// Discrete freshness label.
///
/// `Fresh`, `Aging`, and `Stale` are score tiers. `Superseded` and `Expired`
/// are status labels and never come out of a score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessLabel {
    Fresh,
    Aging,
    Stale,
    Superseded,
    Expired,
}

impl FreshnessLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            FreshnessLabel::Fresh => "fresh",
            FreshnessLabel::Aging => "aging",
            FreshnessLabel::Stale => "stale",
            FreshnessLabel::Superseded => "superseded",
            FreshnessLabel::Expired => "expired",
        }
    }
}

impl fmt::Display for FreshnessLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score onto its tier. Boundaries belong to the higher tier.
pub fn tier_for_score(score: f64, thresholds: &LabelThresholds) -> FreshnessLabel {
    if score >= thresholds.fresh {
        FreshnessLabel::Fresh
    } else if score >= thresholds.aging {
        FreshnessLabel::Aging
    } else {
        FreshnessLabel::Stale
    }
}

/// Status short-circuit. Expiry wins over supersession.
pub fn status_label(expired: bool, superseded: bool) -> Option<FreshnessLabel> {
    if expired {
        Some(FreshnessLabel::Expired)
    } else if superseded {
        Some(FreshnessLabel::Superseded)
    } else {
        None
    }
}

/// Freshness of one belief at one instant. Recomputed on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FreshnessResult {
    /// Score in [0.0, 1.0].
    pub score: f64,
    /// Status label if one applies, otherwise `tier`.
    pub label: FreshnessLabel,
    /// Score tier; always equal to the label function applied to `score`.
    pub tier: FreshnessLabel,
}

impl FreshnessResult {
    pub fn new(score: f64, status: Option<FreshnessLabel>, thresholds: &LabelThresholds) -> Self {
        let tier = tier_for_score(score, thresholds);
        Self {
            score,
            label: status.unwrap_or(tier),
            tier,
        }
    }
}
