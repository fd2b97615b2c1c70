//! Random replacement policy.
//!
//! Evicts a uniformly random frame. The generator is owned by the engine
//! and seeded from configuration, so a run is reproducible bit for bit.

use super::{evict_and_install, find_empty, find_page, Access, ReplacementPolicy, StepContext};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// RANDOM policy (stateless; the generator lives in the engine).
#[derive(Debug, Default)]
pub struct RandomPolicy;

impl RandomPolicy {
    /// Creates a new RANDOM policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for RandomPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Random
    }

    /// Victim: uniform over all frame indices.
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

        let victim = ctx.rng.below(state.table.len());
        evict_and_install(state, victim, page);
        state.table[victim].extra = ctx.t as u64;
        Access::Fault
    }
}
