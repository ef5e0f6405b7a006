//! Bidirectional walk from a seed belief to both ends of its lineage.

use std::collections::HashSet;

use oro_core::errors::{ChainError, OroResult};

use super::lookup::LinkLookup;
use super::ChainMember;

/// Walk backward along `supersedes_id`, then forward along `superseded_by_id`.
///
/// Returns members oldest-first. Every hop checks, in order: the length
/// budget, revisits (cycle), resolvability, and that both pointers agree.
pub(crate) fn walk<L>(seed: &str, lookup: &L, max_len: usize) -> OroResult<Vec<ChainMember>>
where
    L: LinkLookup + ?Sized,
{
    if max_len == 0 {
        return Err(ChainError::ChainTooLong { max: max_len }.into());
    }

    let seed_member = resolve(lookup, seed)?;
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(seed_member.id.clone());

    // Backward, toward the root.
    let mut older: Vec<ChainMember> = Vec::new();
    let mut cursor = seed_member.clone();
    while let Some(prev_id) = cursor.supersedes_id.clone() {
        if older.len() + 1 >= max_len {
            return Err(ChainError::ChainTooLong { max: max_len }.into());
        }
        if !visited.insert(prev_id.clone()) {
            return Err(ChainError::BrokenChain { id: prev_id }.into());
        }
        let prev = resolve(lookup, &prev_id)?;
        if prev.superseded_by_id.as_deref() != Some(cursor.id.as_str()) {
            return Err(ChainError::InconsistentLink {
                from: prev.id,
                to: cursor.id,
            }
            .into());
        }
        older.push(prev.clone());
        cursor = prev;
    }

    // Forward, toward the head.
    let mut newer: Vec<ChainMember> = Vec::new();
    let mut cursor = seed_member.clone();
    while let Some(next_id) = cursor.superseded_by_id.clone() {
        if older.len() + newer.len() + 1 >= max_len {
            return Err(ChainError::ChainTooLong { max: max_len }.into());
        }
        if !visited.insert(next_id.clone()) {
            return Err(ChainError::BrokenChain { id: next_id }.into());
        }
        let next = resolve(lookup, &next_id)?;
        if next.supersedes_id.as_deref() != Some(cursor.id.as_str()) {
            return Err(ChainError::InconsistentLink {
                from: cursor.id,
                to: next.id,
            }
            .into());
        }
        newer.push(next.clone());
        cursor = next;
    }

    let mut members = older;
    members.reverse();
    members.push(seed_member);
    members.extend(newer);
    Ok(members)
}

fn resolve<L>(lookup: &L, id: &str) -> OroResult<ChainMember>
where
    L: LinkLookup + ?Sized,
{
    match lookup.lookup(id)? {
        Some(links) => Ok(ChainMember::from_links(id, links)),
        None => Err(ChainError::UnresolvedLink { id: id.to_string() }.into()),
    }
}
