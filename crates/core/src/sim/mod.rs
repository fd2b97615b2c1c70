//! Simulation driver.
//!
//! The engine owns everything a run needs: the trace, one
//! policy-plus-state pair per catalogue entry, the tick source, and the
//! seeded generator. One reference is processed to completion across all
//! selected policies before the next begins.

/// Reference loop, timing, and hit/miss accounting.
pub mod engine;

pub use engine::{Engine, PolicyRun};
