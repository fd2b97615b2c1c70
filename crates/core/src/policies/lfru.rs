//! Least frequently recently used: the two-partition LRU/LFU hybrid.
//!
//! LFRU keeps a privileged partition under LRU discipline for the hot path
//! and an unprivileged partition under LFU discipline for the cold path.
//! New and promoted pages enter the privileged tier; the page it displaces
//! is demoted into the unprivileged tier, where only frequency keeps it
//! alive. A bottom-tier hit promotes the page back up, giving every
//! demoted page one frequency-weighted chance to return.
//!
//! Only frames that leave residency altogether (LFU evictions from the
//! unprivileged partition) enter the victim log; promotions and demotions
//! are moves between tiers, not evictions.

use super::{Access, ReplacementPolicy, StepContext};
use crate::cache::{PartitionPair, PolicyState};
use crate::config::{defaults, PolicyKind};

/// LFRU policy (stateless; the partitions live in the policy state).
#[derive(Debug, Default)]
pub struct LfruPolicy;

impl LfruPolicy {
    /// Creates a new LFRU policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for LfruPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lfru
    }

    /// Top-tier hit, bottom-tier hit with promotion, or miss insertion,
    /// per the two-partition protocol.
    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access {
        let pair = state.lfru.get_or_insert_with(|| {
            PartitionPair::new(
                defaults::PRIVILEGED_PARTITION_SIZE,
                defaults::UNPRIVILEGED_PARTITION_SIZE,
            )
        });

        // 1. Hot-path hit: refresh recency, nothing moves.
        if pair.privileged.contains(page) {
            pair.privileged.touch(page, ctx.ticks);
            return Access::Hit;
        }

        // 2. Cold-path hit: promote, demoting the privileged LRU victim
        //    first when the hot tier is full.
        if pair.unprivileged.contains(page) {
            pair.unprivileged.remove(page);
            if !pair.privileged.has_space() {
                if let Some(evicted) = pair.demote(ctx.ticks) {
                    state.victim_log.push(evicted);
                }
            }
            pair.privileged.insert(page, ctx.ticks);
            return Access::Hit;
        }

        // 3. Miss: new pages always enter the privileged tier.
        if !pair.privileged.has_space() {
            if let Some(evicted) = pair.demote(ctx.ticks) {
                state.victim_log.push(evicted);
            }
        }
        pair.privileged.insert(page, ctx.ticks);
        Access::Fault
    }
}
