//! Least frequently used replacement policy.
//!
//! Evicts the frame with the smallest hit count; equal counts fall back to
//! the older logical tick, so among equally cold pages the stalest one
//! goes first.

use super::{
    evict_and_install, find_empty, find_page, min_resident_by, Access, ReplacementPolicy,
    StepContext,
};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// LFU policy state (none; counts and ticks live in the frames).
#[derive(Debug, Default)]
pub struct LfuPolicy;

impl LfuPolicy {
    /// Creates a new LFU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LfuPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfu
    }

    /// Hit: count up and refresh the tick. Victim: smallest (frequency,
    /// tick) pair.
    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        if let Some(idx) = find_page(&state.table, page) {
            state.table[idx].frequency += 1;
            state.table[idx].last_used = ctx.ticks.next();
            state.table[idx].touch();
            return Access::Hit;
        }

        if let Some(idx) = find_empty(&state.table) {
            state.table[idx].install(page);
            state.table[idx].frequency = 1;
            state.table[idx].last_used = ctx.ticks.next();
            return Access::Fault;
        }

        if let Some(victim) = min_resident_by(&state.table, |f| (f.frequency, f.last_used)) {
            evict_and_install(state, victim, page);
            state.table[victim].frequency = 1;
            state.table[victim].last_used = ctx.ticks.next();
        }
        Access::Fault
    }
}
