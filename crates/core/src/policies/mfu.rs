//! Most frequently used replacement policy.
//!
//! Evicts the frame with the largest hit count, on the theory that a page
//! referenced heavily in the past has had its turn. Inserted pages start
//! their count at 1.

use super::{
    evict_and_install, find_empty, find_page, max_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// MFU policy state (none; counts live in the frames).
#[derive(Debug, Default)]
pub struct MfuPolicy;

impl MfuPolicy {
    /// Creates a new MFU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for MfuPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mfu
    }

    /// Hit: count up. Insert: count starts at 1. Victim: largest count.
    fn step(&mut self, state: &mut PolicyState, page: i64, _ctx: &mut StepContext<'_>) -> Access {
        if let Some(idx) = find_page(&state.table, page) {
            state.table[idx].extra += 1;
            return Access::Hit;
        }

        if let Some(idx) = find_empty(&state.table) {
            state.table[idx].install(page);
            state.table[idx].extra = 1;
            return Access::Fault;
        }

        if let Some(victim) = max_resident_by(&state.table, |f| f.extra) {
            evict_and_install(state, victim, page);
            state.table[victim].extra = 1;
        }
        Access::Fault
    }
}
