use super::error_code::{self, OroErrorCode};

/// Supersession chain errors.
///
/// Every variant is a data-integrity signal: the chain builder never repairs
/// links or falls back to a single-member chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("broken chain: belief {id} revisited during traversal (cycle)")]
    BrokenChain { id: String },

    #[error("unresolved link: belief {id} could not be found")]
    UnresolvedLink { id: String },

    #[error("chain too long: traversal exceeded {max} members")]
    ChainTooLong { max: usize },

    #[error("chain has no resolved head: last member {last} is still superseded")]
    NoHead { last: String },

    #[error("belief {id} is not in this chain")]
    NotInChain { id: String },

    #[error("inconsistent link between {from} and {to}: pointers are not mutual")]
    InconsistentLink { from: String, to: String },

    #[error("chain has no members")]
    EmptyChain,

    #[error("chain root {id} still points to predecessor {supersedes}")]
    RootHasPredecessor { id: String, supersedes: String },
}

impl OroErrorCode for ChainError {
    fn error_code(&self) -> &'static str {
        error_code::CHAIN_ERROR
    }
}
