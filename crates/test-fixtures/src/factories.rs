//! Belief builders shared by tests and benches.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use oro_core::belief::{Belief, BeliefConfidence, BeliefLinks, BeliefStatus};

/// Builder for test beliefs.
///
/// Defaults: random UUID id, content "Test belief content", overall
/// confidence 0.7, domain `["test", "domain"]`, active, created and
/// modified at the factory's `now`.
#[derive(Debug, Clone)]
pub struct BeliefFactory {
    belief: Belief,
}

impl BeliefFactory {
    pub fn new(now: DateTime<Utc>) -> Self {
        let mut belief = Belief::new(
            uuid::Uuid::new_v4().to_string(),
            "Test belief content",
            now,
        );
        belief.domain_path = vec!["test".to_string(), "domain".to_string()];
        Self { belief }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.belief.id = id.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.belief.content = content.into();
        self
    }

    pub fn confidence(mut self, overall: f64) -> Self {
        self.belief.confidence = BeliefConfidence::new(overall);
        self
    }

    pub fn status(mut self, status: BeliefStatus) -> Self {
        self.belief.status = status;
        self
    }

    pub fn created_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.belief.created_at = at;
        self
    }

    pub fn modified_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.belief.modified_at = at;
        self
    }

    /// Set both timestamps to `age` before `now`.
    pub fn aged(mut self, now: DateTime<Utc>, age: Duration) -> Self {
        self.belief.created_at = Some(now - age);
        self.belief.modified_at = Some(now - age);
        self
    }

    pub fn valid_from(mut self, at: DateTime<Utc>) -> Self {
        self.belief.valid_from = Some(at);
        self
    }

    pub fn valid_until(mut self, at: DateTime<Utc>) -> Self {
        self.belief.valid_until = Some(at);
        self
    }

    pub fn supersedes(mut self, id: impl Into<String>) -> Self {
        self.belief.supersedes_id = Some(id.into());
        self
    }

    pub fn superseded_by(mut self, id: impl Into<String>) -> Self {
        self.belief.superseded_by_id = Some(id.into());
        self
    }

    pub fn build(self) -> Belief {
        self.belief
    }
}

/// `n` beliefs `b0 .. b{n-1}` linked oldest-first; `b{n-1}` is the head.
/// Each is one day newer than the previous, the head modified at `now`.
pub fn linear_chain(n: usize, now: DateTime<Utc>) -> Vec<Belief> {
    (0..n)
        .map(|i| {
            let age = Duration::days((n - 1 - i) as i64);
            let mut factory = BeliefFactory::new(now)
                .id(format!("b{i}"))
                .content(format!("Revision {i}"))
                .aged(now, age);
            if i > 0 {
                factory = factory.supersedes(format!("b{}", i - 1));
            }
            if i + 1 < n {
                factory = factory
                    .superseded_by(format!("b{}", i + 1))
                    .status(BeliefStatus::Superseded);
            }
            factory.build()
        })
        .collect()
}

/// Link map over a batch of beliefs, keyed by id.
pub fn chain_links(beliefs: &[Belief]) -> HashMap<String, BeliefLinks> {
    beliefs.iter().map(|b| (b.id.clone(), b.links())).collect()
}
