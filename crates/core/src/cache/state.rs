//! Per-policy working set.
//!
//! Each policy owns exactly one `PolicyState`. The frame table is sized
//! once at construction and never reallocated; frames are mutated in
//! place. Hit and miss counters are written by the engine alone, from the
//! access outcome a policy step returns.

use std::time::Duration;

use super::frame::Frame;
use super::partition::PartitionPair;

/// Working set of one policy: counters, frame table, victim log, timing,
/// and the LFRU partition pair where applicable.
#[derive(Debug, Clone)]
pub struct PolicyState {
    /// References that found their page resident. Engine-written.
    pub hits: u64,
    /// References that faulted. Engine-written.
    pub misses: u64,
    /// Frame table, one slot per frame, indexes `0..frames`.
    pub table: Vec<Frame>,
    /// Snapshots of evicted frames, in eviction order.
    pub victim_log: Vec<Frame>,
    /// Accumulated time spent inside the policy's decision function.
    pub exec_time: Duration,
    /// Two-partition substate, present only for LFRU.
    pub lfru: Option<PartitionPair>,
}

impl PolicyState {
    /// Creates a state with `frames` empty slots and no LFRU substate.
    pub fn new(frames: usize) -> Self {
        Self {
            hits: 0,
            misses: 0,
            table: (0..frames).map(Frame::new).collect(),
            victim_log: Vec::new(),
            exec_time: Duration::ZERO,
            lfru: None,
        }
    }

    /// Creates a state carrying LFRU partitions of the given capacities.
    pub fn with_partitions(frames: usize, privileged: usize, unprivileged: usize) -> Self {
        let mut state = Self::new(frames);
        state.lfru = Some(PartitionPair::new(privileged, unprivileged));
        state
    }

    /// Number of frames in the table.
    pub fn frames(&self) -> usize {
        self.table.len()
    }

    /// Hit ratio over the references processed so far, 0.0 before the
    /// first reference.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }

    /// Pages currently resident. For LFRU this is the union of both
    /// partitions; for every other policy it is the non-empty table slots.
    pub fn resident_pages(&self) -> Vec<i64> {
        match &self.lfru {
            Some(pair) => pair.resident_pages(),
            None => self
                .table
                .iter()
                .filter(|f| !f.is_empty())
                .map(|f| f.page)
                .collect(),
        }
    }
}
