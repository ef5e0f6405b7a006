//! Link lookup seam: how the chain builder reads supersession pointers.
//!
//! The builder never owns beliefs. Callers hand it something that can resolve
//! an id to its pointer pair: an in-memory map, a [`BeliefIndex`] over loaded
//! records, or a closure wrapping a storage query.

use std::collections::HashMap;
use std::hash::BuildHasher;

use oro_core::belief::{Belief, BeliefLinks};
use oro_core::errors::OroResult;

/// Resolves a belief id to its supersession links.
pub trait LinkLookup {
    /// `Ok(None)` means the id is unknown. `Err` is a failure of the lookup
    /// itself and aborts the chain build unchanged.
    fn lookup(&self, id: &str) -> OroResult<Option<BeliefLinks>>;
}

impl<S: BuildHasher> LinkLookup for HashMap<String, BeliefLinks, S> {
    fn lookup(&self, id: &str) -> OroResult<Option<BeliefLinks>> {
        Ok(self.get(id).cloned())
    }
}

impl<T: LinkLookup + ?Sized> LinkLookup for &T {
    fn lookup(&self, id: &str) -> OroResult<Option<BeliefLinks>> {
        (**self).lookup(id)
    }
}

/// Id-indexed view over a batch of belief records.
#[derive(Debug, Clone, Default)]
pub struct BeliefIndex {
    links: HashMap<String, BeliefLinks>,
}

impl BeliefIndex {
    /// Index a batch of beliefs. A repeated id keeps the last record seen.
    pub fn from_beliefs<'a, I>(beliefs: I) -> Self
    where
        I: IntoIterator<Item = &'a Belief>,
    {
        let links = beliefs
            .into_iter()
            .map(|b| (b.id.clone(), b.links()))
            .collect();
        Self { links }
    }

    pub fn get(&self, id: &str) -> Option<&BeliefLinks> {
        self.links.get(id)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl LinkLookup for BeliefIndex {
    fn lookup(&self, id: &str) -> OroResult<Option<BeliefLinks>> {
        Ok(self.links.get(id).cloned())
    }
}

/// Adapts a closure into a [`LinkLookup`].
///
/// ```
/// use oro_core::belief::BeliefLinks;
/// use oro_core::OroError;
/// use oro_temporal::{FnLookup, SupersessionChain};
///
/// let lookup = FnLookup(|id: &str| {
///     Ok::<_, OroError>(match id {
///         "a" => Some(BeliefLinks::new(None, Some("b"))),
///         "b" => Some(BeliefLinks::new(Some("a"), None)),
///         _ => None,
///     })
/// });
/// let chain = SupersessionChain::build("a", &lookup).unwrap();
/// assert_eq!(chain.head().unwrap(), "b");
/// ```
pub struct FnLookup<F>(pub F);

impl<F> LinkLookup for FnLookup<F>
where
    F: Fn(&str) -> OroResult<Option<BeliefLinks>>,
{
    fn lookup(&self, id: &str) -> OroResult<Option<BeliefLinks>> {
        (self.0)(id)
    }
}
