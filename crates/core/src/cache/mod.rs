//! Cache-slot data model shared by every replacement policy.
//!
//! This module holds the generic state the policies operate on:
//! 1. **Frame:** A single cache slot with per-policy metadata.
//! 2. **PolicyState:** One policy's working set (frame table, counters,
//!    victim log, timing, optional LFRU substate).
//! 3. **Partition / PartitionPair:** The two-tier frame bags used by LFRU.

/// Single cache slot with per-policy metadata.
pub mod frame;

/// LFRU two-partition substate.
pub mod partition;

/// Per-policy working set.
pub mod state;

pub use frame::{Frame, EMPTY};
pub use partition::{Partition, PartitionPair};
pub use state::PolicyState;
