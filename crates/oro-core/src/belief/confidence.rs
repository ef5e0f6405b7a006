use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::defaults;
use crate::errors::FreshnessError;

/// Confidence attached to a belief.
///
/// Upstream stores this as a JSON object with at least an `overall` key;
/// any other keys are kept verbatim in `components`. Unlike a clamped score,
/// out-of-range values are preserved so [`BeliefConfidence::validate`] can
/// report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeliefConfidence {
    pub overall: f64,
    #[serde(flatten)]
    #[ts(skip)]
    pub components: BTreeMap<String, serde_json::Value>,
}

impl BeliefConfidence {
    pub fn new(overall: f64) -> Self {
        Self {
            overall,
            components: BTreeMap::new(),
        }
    }

    /// Attach a named component score (e.g. `"evidence"`).
    pub fn with_component(mut self, name: impl Into<String>, value: f64) -> Self {
        self.components.insert(name.into(), serde_json::Value::from(value));
        self
    }

    /// Numeric value of a component, if present and numeric.
    pub fn component(&self, name: &str) -> Option<f64> {
        self.components.get(name).and_then(serde_json::Value::as_f64)
    }

    /// Fails unless `overall` is a finite number within [0.0, 1.0].
    pub fn validate(&self) -> Result<f64, FreshnessError> {
        if self.overall.is_finite() && (0.0..=1.0).contains(&self.overall) {
            Ok(self.overall)
        } else {
            Err(FreshnessError::InvalidConfidence {
                value: self.overall,
            })
        }
    }
}

impl Default for BeliefConfidence {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_OVERALL_CONFIDENCE)
    }
}

impl From<f64> for BeliefConfidence {
    fn from(overall: f64) -> Self {
        Self::new(overall)
    }
}
