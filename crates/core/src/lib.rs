//! Trace-driven page-replacement policy simulator.
//!
//! This crate replays a recorded stream of `(pid, page)` references
//! against a catalogue of replacement policies over an identical
//! fixed-size frame table, and reports per-policy hit ratios and decision
//! time. It provides:
//! 1. **Cache model:** Frames, per-policy state, and the LFRU partitions.
//! 2. **Policies:** OPTIMAL, RANDOM, FIFO, LRU, CLOCK, NFU, AGING, MRU,
//!    NRU, MFU, LFU, and the LFRU two-partition hybrid.
//! 3. **Engine:** The reference loop with per-step timing and hit/miss
//!    accounting.
//! 4. **Trace:** The whitespace-separated `<pid> <page>` file reader.
//! 5. **Reporting:** Ranked summaries and page-table dumps.

/// Cache-slot data model (frames, policy state, LFRU partitions).
pub mod cache;
/// Shared leaves (errors, logical ticks, seedable RNG).
pub mod common;
/// Configuration (defaults, policy catalogue, hierarchical config).
pub mod config;
/// Replacement-policy decision procedures.
pub mod policies;
/// Simulation engine.
pub mod sim;
/// Summaries and page-table dumps.
pub mod stats;
/// Page-reference traces and the trace-file reader.
pub mod trace;

/// Root configuration type; use `SimConfig::default()` or deserialize
/// from JSON.
pub use crate::config::{PolicyKind, Selection, SimConfig};
/// Simulator error taxonomy.
pub use crate::common::SimError;
/// Main simulator type; construct with `Engine::new` and call `run`.
pub use crate::sim::Engine;
/// Page-reference trace; load with `Trace::from_path`.
pub use crate::trace::Trace;
