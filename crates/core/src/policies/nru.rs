//! Not recently used replacement policy.
//!
//! This simulator's NRU is exactly LRU: it evicts the frame with the
//! smallest recency counter and keeps the NRU label for report
//! compatibility. A true reference/modified-bit NRU is a non-goal.

use super::lru::step_recency;
use super::{Access, ReplacementPolicy, StepContext};
use crate::cache::PolicyState;
use crate::config::PolicyKind;

/// NRU policy (an alias of LRU under its own label).
#[derive(Debug, Default)]
pub struct NruPolicy;

impl NruPolicy {
    /// Creates a new NRU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for NruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Nru
    }

    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        step_recency(state, page, ctx.t)
    }
}
