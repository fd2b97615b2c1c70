//! Most recently used replacement policy.
//!
//! Evicts the frame touched most recently. Counter-intuitive for general
//! workloads, but for cyclic scans larger than the cache the most recent
//! page is precisely the one needed furthest in the future.

use super::{
    evict_and_install, find_empty, find_page, max_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// MRU policy state (none; recency lives in the frames).
#[derive(Debug, Default)]
pub struct MruPolicy;

impl MruPolicy {
    /// Creates a new MRU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for MruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Mru
    }

    /// Hit: refresh recency. Victim: largest recency counter.
    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        if let Some(idx) = find_page(&state.table, page) {
            state.table[idx].extra = ctx.t as u64;
            state.table[idx].touch();
            return Access::Hit;
        }

        if let Some(idx) = find_empty(&state.table) {
            state.table[idx].install(page);
            state.table[idx].extra = ctx.t as u64;
            return Access::Fault;
        }

        if let Some(victim) = max_resident_by(&state.table, |f| f.extra) {
            evict_and_install(state, victim, page);
            state.table[victim].extra = ctx.t as u64;
        }
        Access::Fault
    }
}
