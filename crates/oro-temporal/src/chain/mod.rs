//! Supersession chains, the revision lineage of a belief.
//!
//! A chain is ordered oldest-first: the root supersedes nothing, each later
//! member supersedes the one before it, and the head (if resolved) has not
//! been superseded. Chains are built on demand from caller-supplied links and
//! never persisted here.

mod build;
pub mod lookup;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use oro_core::belief::{Belief, BeliefLinks};
use oro_core::config::{defaults, ChainConfig};
use oro_core::errors::{ChainError, OroResult};

pub use lookup::{BeliefIndex, FnLookup, LinkLookup};

/// One belief in a chain, with the pointers it was resolved with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainMember {
    pub id: String,
    pub supersedes_id: Option<String>,
    pub superseded_by_id: Option<String>,
}

impl ChainMember {
    pub fn from_links(id: &str, links: BeliefLinks) -> Self {
        Self {
            id: id.to_string(),
            supersedes_id: links.supersedes_id,
            superseded_by_id: links.superseded_by_id,
        }
    }
}

impl From<&Belief> for ChainMember {
    fn from(belief: &Belief) -> Self {
        Self::from_links(&belief.id, belief.links())
    }
}

/// A validated, immutable lineage of belief revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersessionChain {
    members: Vec<ChainMember>,
    positions: HashMap<String, usize>,
}

impl SupersessionChain {
    /// Build the chain containing `seed` with the default length budget.
    pub fn build<L>(seed: &str, lookup: &L) -> OroResult<Self>
    where
        L: LinkLookup + ?Sized,
    {
        Self::build_with_limit(seed, lookup, defaults::DEFAULT_MAX_CHAIN_LENGTH)
    }

    pub fn build_with_config<L>(seed: &str, lookup: &L, config: &ChainConfig) -> OroResult<Self>
    where
        L: LinkLookup + ?Sized,
    {
        Self::build_with_limit(seed, lookup, config.max_chain_length)
    }

    /// Build the chain containing `seed`, collecting at most `max_len` members.
    ///
    /// Lookup errors propagate as-is; they are never retried.
    pub fn build_with_limit<L>(seed: &str, lookup: &L, max_len: usize) -> OroResult<Self>
    where
        L: LinkLookup + ?Sized,
    {
        let members = build::walk(seed, lookup, max_len).map_err(|e| {
            warn!(seed, error = %e, "supersession chain build failed");
            e
        })?;
        let chain = Self::from_members(members)?;
        debug!(
            seed,
            members = chain.len(),
            root = %chain.root().id,
            "supersession chain built"
        );
        Ok(chain)
    }

    /// Validate a caller-assembled chain, ordered oldest-first.
    ///
    /// The root must not point to a predecessor, ids must be unique, and
    /// adjacent members must point at each other. A last member that still
    /// has a successor is accepted: the chain is then headless.
    pub fn from_members(members: Vec<ChainMember>) -> Result<Self, ChainError> {
        let root = members.first().ok_or(ChainError::EmptyChain)?;
        if let Some(prev) = &root.supersedes_id {
            return Err(ChainError::RootHasPredecessor {
                id: root.id.clone(),
                supersedes: prev.clone(),
            });
        }

        let mut positions = HashMap::with_capacity(members.len());
        for (i, member) in members.iter().enumerate() {
            if positions.insert(member.id.clone(), i).is_some() {
                return Err(ChainError::BrokenChain {
                    id: member.id.clone(),
                });
            }
        }

        for pair in members.windows(2) {
            let (older, newer) = (&pair[0], &pair[1]);
            let forward_ok = older.superseded_by_id.as_deref() == Some(newer.id.as_str());
            let backward_ok = newer.supersedes_id.as_deref() == Some(older.id.as_str());
            if !(forward_ok && backward_ok) {
                return Err(ChainError::InconsistentLink {
                    from: older.id.clone(),
                    to: newer.id.clone(),
                });
            }
        }

        Ok(Self { members, positions })
    }

    /// Members oldest-first.
    pub fn members(&self) -> &[ChainMember] {
        &self.members
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(|m| m.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false: a chain holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn root(&self) -> &ChainMember {
        &self.members[0]
    }

    /// True when the newest member is not superseded by anything.
    pub fn has_head(&self) -> bool {
        self.last().superseded_by_id.is_none()
    }

    /// The current (non-superseded) belief.
    ///
    /// Fails with [`ChainError::NoHead`] when the chain ends on a member
    /// that still points to a successor.
    pub fn head(&self) -> Result<&str, ChainError> {
        let last = self.last();
        match &last.superseded_by_id {
            None => Ok(last.id.as_str()),
            Some(_) => Err(ChainError::NoHead {
                last: last.id.clone(),
            }),
        }
    }

    /// 0-based index from the root.
    pub fn position_of(&self, id: &str) -> Result<usize, ChainError> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| ChainError::NotInChain { id: id.to_string() })
    }

    /// True iff `id` is not the head.
    pub fn is_superseded(&self, id: &str) -> Result<bool, ChainError> {
        let pos = self.position_of(id)?;
        Ok(self.members[pos].superseded_by_id.is_some())
    }

    /// Number of revisions between `id` and the head (0 for the head).
    pub fn depth_of(&self, id: &str) -> Result<usize, ChainError> {
        let pos = self.position_of(id)?;
        self.head()?;
        Ok(self.members.len() - 1 - pos)
    }

    /// The member that directly replaced `id`, if it is in the chain.
    pub fn successor_of(&self, id: &str) -> Result<Option<&ChainMember>, ChainError> {
        let pos = self.position_of(id)?;
        Ok(self.members.get(pos + 1))
    }

    /// The member `id` directly replaced.
    pub fn predecessor_of(&self, id: &str) -> Result<Option<&ChainMember>, ChainError> {
        let pos = self.position_of(id)?;
        Ok(pos.checked_sub(1).map(|p| &self.members[p]))
    }

    fn last(&self) -> &ChainMember {
        &self.members[self.members.len() - 1]
    }
}
