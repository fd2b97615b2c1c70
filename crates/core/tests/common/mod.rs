//! Shared test infrastructure.
//!
//! Most tests drive a full [`Engine`] over a short page list; the helpers
//! here build the configuration and return the finished engine so the
//! per-policy state can be inspected. Policy-level tests that need to call
//! `step` directly use [`Ctx`], which owns the trace, tick source, and
//! generator a [`StepContext`] borrows.

use pagesim_core::common::{TickSource, XorShift64};
use pagesim_core::config::{CacheConfig, GeneralConfig, PolicyKind, Selection, SimConfig};
use pagesim_core::policies::StepContext;
use pagesim_core::{Engine, Trace};

/// Builds a quiet configuration for the given selection and frame count.
pub fn config_for(selection: Selection, frames: usize) -> SimConfig {
    SimConfig {
        general: GeneralConfig::default(),
        cache: CacheConfig {
            frames,
            ..CacheConfig::default()
        },
        selection,
    }
}

/// Runs one selection over `pages` and returns the finished engine.
pub fn run_engine(selection: Selection, frames: usize, pages: &[i64]) -> Engine {
    let config = config_for(selection, frames);
    let mut engine = Engine::new(Trace::from_pages(pages), &config).expect("engine");
    engine.run();
    engine
}

/// Hit and miss counts of a single policy over `pages`.
pub fn counts(kind: PolicyKind, frames: usize, pages: &[i64]) -> (u64, u64) {
    let engine = run_engine(Selection::One(kind), frames, pages);
    let run = engine.run_for(kind).expect("selected run");
    (run.state.hits, run.state.misses)
}

/// Victim pages of a single policy over `pages`, in eviction order.
pub fn victims(kind: PolicyKind, frames: usize, pages: &[i64]) -> Vec<i64> {
    let engine = run_engine(Selection::One(kind), frames, pages);
    let run = engine.run_for(kind).expect("selected run");
    run.state.victim_log.iter().map(|f| f.page).collect()
}

/// Owner of the engine-side inputs for direct `step` calls.
pub struct Ctx {
    trace: Trace,
    ticks: TickSource,
    rng: XorShift64,
}

impl Ctx {
    /// Creates a context over the given future trace.
    pub fn new(pages: &[i64]) -> Self {
        Self {
            trace: Trace::from_pages(pages),
            ticks: TickSource::new(),
            rng: XorShift64::new(7),
        }
    }

    /// Borrows a step context positioned at reference `t`.
    pub fn at(&mut self, t: usize) -> StepContext<'_> {
        StepContext {
            t,
            trace: &self.trace,
            ticks: &mut self.ticks,
            rng: &mut self.rng,
        }
    }
}
