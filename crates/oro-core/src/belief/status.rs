use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::OroError;

/// Lifecycle status of a belief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BeliefStatus {
    #[default]
    Active,
    Superseded,
    Archived,
    /// Involved in an unresolved tension with another belief.
    Disputed,
}

impl BeliefStatus {
    pub const ALL: [BeliefStatus; 4] = [
        BeliefStatus::Active,
        BeliefStatus::Superseded,
        BeliefStatus::Archived,
        BeliefStatus::Disputed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BeliefStatus::Active => "active",
            BeliefStatus::Superseded => "superseded",
            BeliefStatus::Archived => "archived",
            BeliefStatus::Disputed => "disputed",
        }
    }
}

impl fmt::Display for BeliefStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeliefStatus {
    type Err = OroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| OroError::InvalidStatus {
                name: s.to_string(),
            })
    }
}
