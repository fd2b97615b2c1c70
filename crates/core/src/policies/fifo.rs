//! First-in, first-out replacement policy.
//!
//! The defining property is that hits change nothing: a frame's position
//! in the eviction order is fixed at insertion. The insertion reference
//! counter is kept in `extra`, which makes the victim choice deterministic
//! regardless of timer resolution.

use super::{
    evict_and_install, find_empty, find_page, min_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// FIFO policy state (none; order lives in the frames).
#[derive(Debug, Default)]
pub struct FifoPolicy;

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    /// Hit: no change. Victim: oldest insertion counter.
    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        if find_page(&state.table, page).is_some() {
            return Access::Hit;
        }

        if let Some(idx) = find_empty(&state.table) {
            state.table[idx].install(page);
            state.table[idx].extra = ctx.t as u64;
            return Access::Fault;
        }

        if let Some(victim) = min_resident_by(&state.table, |f| f.extra) {
            evict_and_install(state, victim, page);
            state.table[victim].extra = ctx.t as u64;
        }
        Access::Fault
    }
}
