//! Not frequently used replacement policy.
//!
//! Counts hits per frame in `extra` and evicts the smallest count. Newly
//! inserted pages start at 0, so a page must earn its keep before it
//! outranks anything.

use super::{
    evict_and_install, find_empty, find_page, min_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// NFU policy state (none; counts live in the frames).
#[derive(Debug, Default)]
pub struct NfuPolicy;

impl NfuPolicy {
    /// Creates a new NFU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for NfuPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Nfu
    }

    /// Hit: count up. Insert: count starts at 0. Victim: smallest count.
    fn step(&mut self, state: &mut PolicyState, page: i64, _ctx: &mut StepContext<'_>) -> Access {
        if let Some(idx) = find_page(&state.table, page) {
            state.table[idx].extra += 1;
            state.table[idx].touch();
            return Access::Hit;
        }

        if let Some(idx) = find_empty(&state.table) {
            state.table[idx].install(page);
            return Access::Fault;
        }

        if let Some(victim) = min_resident_by(&state.table, |f| f.extra) {
            evict_and_install(state, victim, page);
        }
        Access::Fault
    }
}
