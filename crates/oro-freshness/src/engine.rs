use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use oro_core::belief::Belief;
use oro_core::config::FreshnessConfig;
use oro_core::errors::{ConfigError, FreshnessError, OroResult};
use oro_temporal::{SupersessionChain, TemporalValidity};

use crate::factors::{self, FreshnessInput};
use crate::formula::{self, FreshnessBreakdown};
use crate::label::{self, FreshnessLabel, FreshnessResult};

/// Freshness scorer holding a validated [`FreshnessConfig`].
///
/// Every method takes `now` explicitly; nothing here reads the clock.
#[derive(Debug, Clone, Default)]
pub struct FreshnessScorer {
    config: FreshnessConfig,
}

impl FreshnessScorer {
    /// Create a scorer, rejecting an invalid config.
    pub fn new(config: FreshnessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &FreshnessConfig {
        &self.config
    }

    /// Score a belief on its own. Supersession comes from the record itself
    /// (`superseded_by_id` or a superseded status).
    pub fn calculate(&self, belief: &Belief, now: DateTime<Utc>) -> OroResult<FreshnessResult> {
        let breakdown = self.breakdown(belief, None, now)?;
        Ok(self.result_from(&breakdown))
    }

    /// Score a belief by its position in `chain`: any non-head member is
    /// superseded. Fails if the belief is not in the chain.
    pub fn calculate_in_chain(
        &self,
        belief: &Belief,
        chain: &SupersessionChain,
        now: DateTime<Utc>,
    ) -> OroResult<FreshnessResult> {
        let breakdown = self.breakdown(belief, Some(chain), now)?;
        Ok(self.result_from(&breakdown))
    }

    /// Compute the score with every factor exposed.
    pub fn breakdown(
        &self,
        belief: &Belief,
        chain: Option<&SupersessionChain>,
        now: DateTime<Utc>,
    ) -> OroResult<FreshnessBreakdown> {
        let input = self.input_for(belief, chain, now)?;
        let breakdown = formula::compute_breakdown(&input, &self.config);
        debug!(
            belief_id = %belief.id,
            age_days = breakdown.age_days,
            decay = breakdown.decay,
            penalty = breakdown.penalty,
            score = breakdown.score,
            "freshness computed"
        );
        Ok(breakdown)
    }

    /// Map a score onto its tier with this scorer's thresholds.
    pub fn label(&self, score: f64) -> FreshnessLabel {
        label::tier_for_score(score, &self.config.thresholds)
    }

    /// Score a batch and sort freshest first. Beliefs that cannot be scored
    /// are logged and left out.
    pub fn rank<'a>(
        &self,
        beliefs: &'a [Belief],
        now: DateTime<Utc>,
    ) -> Vec<(&'a Belief, FreshnessResult)> {
        let mut scored: Vec<_> = beliefs
            .iter()
            .filter_map(|belief| match self.calculate(belief, now) {
                Ok(result) => Some((belief, result)),
                Err(e) => {
                    warn!(belief_id = %belief.id, error = %e, "skipping unscorable belief");
                    None
                }
            })
            .collect();
        scored.sort_by(|a, b| b.1.score.partial_cmp(&a.1.score).unwrap_or(Ordering::Equal));
        scored
    }

    fn input_for(
        &self,
        belief: &Belief,
        chain: Option<&SupersessionChain>,
        now: DateTime<Utc>,
    ) -> OroResult<FreshnessInput> {
        let confidence = belief.confidence.validate()?;
        let basis = belief
            .age_basis()
            .ok_or_else(|| FreshnessError::MissingTimestamp {
                id: belief.id.clone(),
            })?;
        let validity = TemporalValidity::from_belief(belief)?;

        let superseded = match chain {
            Some(chain) => chain.is_superseded(&belief.id)?,
            None => belief.is_marked_superseded(),
        };

        Ok(FreshnessInput {
            confidence,
            age_days: factors::age::age_days(basis, now),
            expired: validity.is_expired(now),
            superseded,
        })
    }

    fn result_from(&self, breakdown: &FreshnessBreakdown) -> FreshnessResult {
        let status = label::status_label(breakdown.expired, breakdown.superseded);
        FreshnessResult::new(breakdown.score, status, &self.config.thresholds)
    }
}

/// Score a belief with the default configuration.
pub fn calculate_freshness(belief: &Belief, now: DateTime<Utc>) -> OroResult<FreshnessResult> {
    FreshnessScorer::default().calculate(belief, now)
}

/// Map a score onto its tier with the default thresholds.
pub fn freshness_label(score: f64) -> FreshnessLabel {
    label::tier_for_score(score, &FreshnessConfig::default().thresholds)
}
