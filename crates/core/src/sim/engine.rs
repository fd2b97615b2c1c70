//! Simulation engine: drives the trace through every selected policy.
//!
//! For each reference the engine dispatches to the selected policies in
//! fixed declaration order, times the decision function with a monotonic
//! clock, and accounts the hit or miss from the returned access outcome.
//! The run vector is never reordered; ranking for the report is a
//! separate borrowed view, so a caller holding an index into the runs
//! always sees the same policy there.

use std::cmp::Ordering;
use std::time::Instant;

use crate::cache::PolicyState;
use crate::common::{SimError, TickSource, XorShift64};
use crate::config::{PolicyKind, SimConfig};
use crate::policies::{
    AgingPolicy, ClockPolicy, FifoPolicy, LfruPolicy, LfuPolicy, LruPolicy, MfuPolicy, MruPolicy,
    NfuPolicy, NruPolicy, OptimalPolicy, RandomPolicy, ReplacementPolicy, StepContext,
};
use crate::stats;
use crate::trace::Trace;

/// One policy paired with its working set and selection flag.
pub struct PolicyRun {
    /// Catalogue entry this run implements.
    pub kind: PolicyKind,
    /// Working set: counters, frame table, victim log, timing.
    pub state: PolicyState,
    /// Whether this run participates in the simulation.
    pub selected: bool,
    policy: Box<dyn ReplacementPolicy>,
}

impl PolicyRun {
    /// Report label of this run's policy.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Builds the decision procedure for a catalogue entry.
fn build_policy(kind: PolicyKind) -> Box<dyn ReplacementPolicy> {
    match kind {
        PolicyKind::Optimal => Box::new(OptimalPolicy::new()),
        PolicyKind::Random => Box::new(RandomPolicy::new()),
        PolicyKind::Fifo => Box::new(FifoPolicy::new()),
        PolicyKind::Lru => Box::new(LruPolicy::new()),
        PolicyKind::Clock => Box::new(ClockPolicy::new()),
        PolicyKind::Nfu => Box::new(NfuPolicy::new()),
        PolicyKind::Aging => Box::new(AgingPolicy::new()),
        PolicyKind::Mru => Box::new(MruPolicy::new()),
        PolicyKind::Nru => Box::new(NruPolicy::new()),
        PolicyKind::Mfu => Box::new(MfuPolicy::new()),
        PolicyKind::Lfu => Box::new(LfuPolicy::new()),
        PolicyKind::Lfru => Box::new(LfruPolicy::new()),
    }
}

/// Trace-driven simulator comparing replacement policies on an identical
/// starting cache configuration.
pub struct Engine {
    trace: Trace,
    runs: Vec<PolicyRun>,
    ticks: TickSource,
    rng: XorShift64,
    frames: usize,
    max_calls: usize,
    show_process: bool,
    adjusted_frames: Option<usize>,
}

impl Engine {
    /// Creates an engine for `trace` under `config`.
    ///
    /// All twelve runs are constructed (selection only flags them), each
    /// with a fresh frame table of the effective frame count. The LFRU run
    /// carries its partition pair; when the configured frame count is
    /// below the combined partition capacity it is raised to that floor
    /// and the adjustment recorded.
    pub fn new(trace: Trace, config: &SimConfig) -> Result<Self, SimError> {
        let (frames, adjusted_frames) = config.effective_frames()?;

        let runs = PolicyKind::ALL
            .into_iter()
            .map(|kind| {
                let state = if kind == PolicyKind::Lfru {
                    PolicyState::with_partitions(
                        frames,
                        config.cache.privileged,
                        config.cache.unprivileged,
                    )
                } else {
                    PolicyState::new(frames)
                };
                PolicyRun {
                    kind,
                    state,
                    selected: config.selection.selects(kind),
                    policy: build_policy(kind),
                }
            })
            .collect();

        Ok(Self {
            trace,
            runs,
            ticks: TickSource::new(),
            rng: XorShift64::new(config.cache.seed),
            frames,
            max_calls: config.general.max_calls,
            show_process: config.general.show_process,
            adjusted_frames,
        })
    }

    /// Runs the simulation to completion.
    ///
    /// Processes references `0..min(trace_len, max_calls)`. Reaching the
    /// reference cap is normal termination, not an error.
    pub fn run(&mut self) {
        let limit = self.max_calls.min(self.trace.len());
        for t in 0..limit {
            let page = self.trace.page_at(t);
            let mut ctx = StepContext {
                t,
                trace: &self.trace,
                ticks: &mut self.ticks,
                rng: &mut self.rng,
            };
            for run in &mut self.runs {
                if !run.selected {
                    continue;
                }
                let started = Instant::now();
                let access = run.policy.step(&mut run.state, page, &mut ctx);
                run.state.exec_time += started.elapsed();
                if access.is_hit() {
                    run.state.hits += 1;
                } else {
                    run.state.misses += 1;
                }
                if self.show_process {
                    stats::print_step(run);
                }
            }
        }
    }

    /// All runs, in declaration order.
    pub fn runs(&self) -> &[PolicyRun] {
        &self.runs
    }

    /// The run for a specific policy.
    pub fn run_for(&self, kind: PolicyKind) -> Option<&PolicyRun> {
        self.runs.iter().find(|run| run.kind == kind)
    }

    /// Selected runs ranked by descending hit ratio.
    ///
    /// The sort is stable, so equal ratios keep declaration order, and it
    /// operates on a borrowed view: run identity in [`Engine::runs`] is
    /// never re-bound.
    pub fn ranked(&self) -> Vec<&PolicyRun> {
        let mut view: Vec<&PolicyRun> = self.runs.iter().filter(|run| run.selected).collect();
        view.sort_by(|a, b| {
            b.state
                .hit_ratio()
                .partial_cmp(&a.state.hit_ratio())
                .unwrap_or(Ordering::Equal)
        });
        view
    }

    /// Effective frame count used by every run.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// `Some(raised_to)` when the LFRU partition floor raised the
    /// configured frame count.
    pub fn adjusted_frames(&self) -> Option<usize> {
        self.adjusted_frames
    }

    /// The trace being simulated.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
