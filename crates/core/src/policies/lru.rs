//! Least recently used replacement policy.
//!
//! Recency is tracked with the reference counter (`extra := t`), which is
//! monotonic in reference order and therefore equivalent to a wall-clock
//! key without its tie ambiguity. The wall timestamp is still refreshed on
//! touches for the page-table dump.
//!
//! The step function is shared with NRU, which this simulator deliberately
//! implements as an exact alias of LRU.

use super::{
    evict_and_install, find_empty, find_page, min_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// LRU policy state (none; recency lives in the frames).
#[derive(Debug, Default)]
pub struct LruPolicy;

impl LruPolicy {
    /// Creates a new LRU policy instance.
    pub fn new() -> Self {
        Self
    }
}

/// One least-recently-used step: refresh recency on hit, evict the
/// smallest recency counter on a full table.
pub(crate) fn step_recency(state: &mut PolicyState, page: i64, t: usize) -> Access {
    if let Some(idx) = find_page(&state.table, page) {
        state.table[idx].extra = t as u64;
        state.table[idx].touch();
        return Access::Hit;
    }

    if let Some(idx) = find_empty(&state.table) {
        state.table[idx].install(page);
        state.table[idx].extra = t as u64;
        return Access::Fault;
    }

    if let Some(victim) = min_resident_by(&state.table, |f| f.extra) {
        evict_and_install(state, victim, page);
        state.table[victim].extra = t as u64;
    }
    Access::Fault
}

impl ReplacementPolicy for LruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        step_recency(state, page, ctx.t)
    }
}
