//! Shared leaves used across the policy engine.
//!
//! This module collects the pieces every other subsystem depends on:
//! 1. **Errors:** The simulator error taxonomy (`SimError`).
//! 2. **Ticks:** The monotonic logical counter used for ordering decisions.
//! 3. **Randomness:** The seedable xorshift generator owned by the engine.

/// Simulator error taxonomy (configuration and IO failures).
pub mod error;

/// Seedable xorshift64 pseudo-random number generator.
pub mod rng;

/// Monotonic logical tick counter.
pub mod tick;

pub use error::SimError;
pub use rng::XorShift64;
pub use tick::TickSource;
