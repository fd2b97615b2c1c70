//! Belady's optimal replacement policy.
//!
//! OPTIMAL evicts the resident page whose next use lies farthest in the
//! future, treating pages never referenced again as infinitely far. It is
//! unrealizable online (it reads the future) but gives the lower bound on
//! misses every other policy is measured against.
//!
//! # Performance
//!
//! The victim scan walks the remaining trace suffix once per resident
//! frame, so a step is O(F x N_remaining) worst case. A per-reference
//! next-use index would amortise this; the direct scan is kept because
//! traces here are short and the policy is a yardstick, not a contender.

use super::{
    evict_and_install, find_empty, find_page, max_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;
use crate::trace::Trace;

/// OPTIMAL policy (stateless; the look-ahead lives in the trace).
#[derive(Debug, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Creates a new OPTIMAL policy instance.
    pub fn new() -> Self {
        Self
    }
}

/// Position of the next reference to `page` strictly after `t`, or
/// `u64::MAX` when the page is never referenced again.
fn next_use(trace: &Trace, t: usize, page: i64) -> u64 {
    for i in (t + 1)..trace.len() {
        if trace.page_at(i) == page {
            return i as u64;
        }
    }
    u64::MAX
}

impl ReplacementPolicy for OptimalPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    /// Hit: refresh recency. Victim: farthest (or never) next use, ties to
    /// the smallest index.
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

        let trace = ctx.trace;
        let t = ctx.t;
        if let Some(victim) = max_resident_by(&state.table, |f| next_use(trace, t, f.page)) {
            evict_and_install(state, victim, page);
            state.table[victim].extra = t as u64;
        }
        Access::Fault
    }
}
