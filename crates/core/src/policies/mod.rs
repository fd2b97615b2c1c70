//! Replacement-policy decision procedures.
//!
//! Every policy is a per-reference decision function over its own
//! [`PolicyState`]: locate the page (hit), otherwise fill an empty frame,
//! otherwise pick a victim, log its snapshot, and overwrite it. CLOCK runs
//! a single-pass sweep instead of the scans, and LFRU follows its own
//! two-partition protocol; everything else is the same three-branch shape
//! with a policy-specific hit rule, insertion rule, and victim rule.
//!
//! Policies never touch the hit/miss counters; the engine accounts those
//! from the [`Access`] value a step returns.

/// NFU with an aging shift register.
pub mod aging;

/// Second-chance clock.
pub mod clock;

/// First-in, first-out.
pub mod fifo;

/// Least frequently used.
pub mod lfu;

/// Two-partition LRU/LFU hybrid.
pub mod lfru;

/// Least recently used.
pub mod lru;

/// Most frequently used.
pub mod mfu;

/// Most recently used.
pub mod mru;

/// Not frequently used.
pub mod nfu;

/// Not recently used (alias of LRU in this simulator).
pub mod nru;

/// Belady's optimal algorithm.
pub mod optimal;

/// Uniform random victim.
pub mod random;

pub use aging::AgingPolicy;
pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lfu::LfuPolicy;
pub use lfru::LfruPolicy;
pub use lru::LruPolicy;
pub use mfu::MfuPolicy;
pub use mru::MruPolicy;
pub use nfu::NfuPolicy;
pub use nru::NruPolicy;
pub use optimal::OptimalPolicy;
pub use random::RandomPolicy;

use crate::cache::{Frame, PolicyState};
use crate::common::{TickSource, XorShift64};
use crate::config::PolicyKind;
use crate::trace::Trace;

/// Outcome of one policy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The requested page was already resident.
    Hit,
    /// The requested page was not resident (with or without eviction).
    Fault,
}

impl Access {
    /// True for [`Access::Hit`].
    pub fn is_hit(self) -> bool {
        self == Access::Hit
    }
}

/// Engine-owned inputs a policy step may read.
///
/// The trace view is what OPTIMAL looks ahead into; the tick source feeds
/// the frequency policies' ordering; the generator belongs to RANDOM.
pub struct StepContext<'a> {
    /// Zero-based index of the reference being processed.
    pub t: usize,
    /// Full trace; policies only inspect the suffix after `t`.
    pub trace: &'a Trace,
    /// Monotonic logical counter.
    pub ticks: &'a mut TickSource,
    /// Seedable generator for RANDOM victim choice.
    pub rng: &'a mut XorShift64,
}

/// Trait implemented by every replacement policy.
///
/// A step mutates the state in place and reports the access outcome; it
/// must not fail and must not write the hit/miss counters.
pub trait ReplacementPolicy {
    /// Which catalogue entry this policy implements.
    fn kind(&self) -> PolicyKind;

    /// Processes one page reference against `state`.
    fn step(&mut self, state: &mut PolicyState, page: i64, ctx: &mut StepContext<'_>) -> Access;
}

/// Slot index of the frame holding `page`, if resident.
pub(crate) fn find_page(table: &[Frame], page: i64) -> Option<usize> {
    table.iter().position(|f| f.page == page)
}

/// Slot index of the first empty frame, if any.
pub(crate) fn find_empty(table: &[Frame]) -> Option<usize> {
    table.iter().position(|f| f.is_empty())
}

/// Resident frame minimizing `key`; ties go to the smallest index.
pub(crate) fn min_resident_by<K, F>(table: &[Frame], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Frame) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (idx, frame) in table.iter().enumerate() {
        if frame.is_empty() {
            continue;
        }
        let k = key(frame);
        match &best {
            Some((_, best_k)) if *best_k <= k => {}
            _ => best = Some((idx, k)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Resident frame maximizing `key`; ties go to the smallest index.
pub(crate) fn max_resident_by<K, F>(table: &[Frame], key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&Frame) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for (idx, frame) in table.iter().enumerate() {
        if frame.is_empty() {
            continue;
        }
        let k = key(frame);
        match &best {
            Some((_, best_k)) if *best_k >= k => {}
            _ => best = Some((idx, k)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Logs a snapshot of the victim frame, then installs `page` in its place
/// with zeroed metadata for the caller's insertion rule.
pub(crate) fn evict_and_install(state: &mut PolicyState, victim: usize, page: i64) {
    let snapshot = state.table[victim].clone();
    state.victim_log.push(snapshot);
    state.table[victim].install(page);
}
