//! Configuration system for the page-replacement simulator.
//!
//! This module defines the configuration structures and enums used to
//! parameterize a run. It provides:
//! 1. **Defaults:** Baseline constants (frame count, partition sizes, seed).
//! 2. **Structures:** Hierarchical config for general options and the cache.
//! 3. **Selection:** The policy catalogue and the one-character selector
//!    codes of the invocation surface.
//!
//! Configuration can be supplied as JSON (every structure derives
//! `Deserialize`) or built field-by-field; the CLI constructs it from
//! command-line arguments.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
pub mod defaults {
    /// Number of page frames when not explicitly configured.
    pub const FRAMES: usize = 5;

    /// Hard upper bound on the frame count.
    ///
    /// Guards against accidental huge allocations from a mistyped
    /// argument; requests above this are a configuration error.
    pub const MAX_FRAMES: usize = 1000;

    /// Reference cap when not explicitly configured (effectively
    /// unbounded; the engine clamps to the trace length).
    pub const MAX_CALLS: usize = usize::MAX;

    /// Privileged (LRU-managed) partition capacity for LFRU.
    pub const PRIVILEGED_PARTITION_SIZE: usize = 5;

    /// Unprivileged (LFU-managed) partition capacity for LFRU.
    pub const UNPRIVILEGED_PARTITION_SIZE: usize = 5;

    /// Default PRNG seed for the RANDOM policy.
    pub const RNG_SEED: u64 = 123_456_789;
}

/// The twelve replacement policies, in engine declaration order.
///
/// Declaration order is part of the contract: it fixes the order policies
/// observe each reference and breaks ranking ties in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// Belady's optimal algorithm (farthest next use).
    Optimal,
    /// Uniform random victim.
    Random,
    /// First-in, first-out.
    Fifo,
    /// Least recently used.
    Lru,
    /// Second-chance clock.
    Clock,
    /// Not frequently used.
    Nfu,
    /// NFU with an aging shift register.
    Aging,
    /// Most recently used.
    Mru,
    /// Not recently used (this simulator's NRU is exactly LRU).
    Nru,
    /// Most frequently used.
    Mfu,
    /// Least frequently used.
    Lfu,
    /// Two-partition LRU/LFU hybrid.
    Lfru,
}

impl PolicyKind {
    /// Every policy, in declaration order.
    pub const ALL: [PolicyKind; 12] = [
        PolicyKind::Optimal,
        PolicyKind::Random,
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Clock,
        PolicyKind::Nfu,
        PolicyKind::Aging,
        PolicyKind::Mru,
        PolicyKind::Nru,
        PolicyKind::Mfu,
        PolicyKind::Lfu,
        PolicyKind::Lfru,
    ];

    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            PolicyKind::Optimal => "OPTIMAL",
            PolicyKind::Random => "RANDOM",
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Clock => "CLOCK",
            PolicyKind::Nfu => "NFU",
            PolicyKind::Aging => "AGING",
            PolicyKind::Mru => "MRU",
            PolicyKind::Nru => "NRU",
            PolicyKind::Mfu => "MFU",
            PolicyKind::Lfu => "LFU",
            PolicyKind::Lfru => "LFRU",
        }
    }

    /// One-character selector code of the invocation surface.
    pub fn code(self) -> char {
        match self {
            PolicyKind::Optimal => 'O',
            PolicyKind::Random => 'R',
            PolicyKind::Fifo => 'F',
            PolicyKind::Lru => 'L',
            PolicyKind::Clock => 'C',
            PolicyKind::Nfu => 'N',
            PolicyKind::Aging => 'A',
            PolicyKind::Mru => 'M',
            PolicyKind::Nru => 'n',
            PolicyKind::Mfu => 'm',
            PolicyKind::Lfu => 'l',
            PolicyKind::Lfru => 'f',
        }
    }

    /// Maps a selector code back to its policy.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }
}

/// Which policies a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Selection {
    /// Run every policy against the same trace.
    #[default]
    All,
    /// Run a single policy.
    One(PolicyKind),
}

impl Selection {
    /// Maps an invocation-surface code (`a` = all) to a selection.
    pub fn from_code(code: char) -> Result<Self, SimError> {
        if code == 'a' {
            return Ok(Selection::All);
        }
        PolicyKind::from_code(code)
            .map(Selection::One)
            .ok_or(SimError::UnknownPolicyCode(code))
    }

    /// True when `kind` participates in the run.
    pub fn selects(self, kind: PolicyKind) -> bool {
        match self {
            Selection::All => true,
            Selection::One(selected) => selected == kind,
        }
    }

    /// True when the LFRU partitions impose their frame-count floor.
    pub fn includes_lfru(self) -> bool {
        self.selects(PolicyKind::Lfru)
    }
}

/// General simulation options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Print a summary and page-table dump after every reference.
    #[serde(default)]
    pub show_process: bool,

    /// Verbose diagnostics; no semantic effect on the policies.
    #[serde(default)]
    pub debug: bool,

    /// Hard upper bound on references processed (clamped to trace length).
    #[serde(default = "GeneralConfig::default_max_calls")]
    pub max_calls: usize,
}

impl GeneralConfig {
    fn default_max_calls() -> usize {
        defaults::MAX_CALLS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_process: false,
            debug: false,
            max_calls: defaults::MAX_CALLS,
        }
    }
}

/// Cache geometry and reproducibility inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Number of page frames per policy. Values below 1 are clamped to 1.
    #[serde(default = "CacheConfig::default_frames")]
    pub frames: usize,

    /// Seed for the RANDOM policy's generator.
    #[serde(default = "CacheConfig::default_seed")]
    pub seed: u64,

    /// LFRU privileged partition capacity.
    #[serde(default = "CacheConfig::default_privileged")]
    pub privileged: usize,

    /// LFRU unprivileged partition capacity.
    #[serde(default = "CacheConfig::default_unprivileged")]
    pub unprivileged: usize,
}

impl CacheConfig {
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    fn default_seed() -> u64 {
        defaults::RNG_SEED
    }

    fn default_privileged() -> usize {
        defaults::PRIVILEGED_PARTITION_SIZE
    }

    fn default_unprivileged() -> usize {
        defaults::UNPRIVILEGED_PARTITION_SIZE
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            frames: defaults::FRAMES,
            seed: defaults::RNG_SEED,
            privileged: defaults::PRIVILEGED_PARTITION_SIZE,
            unprivileged: defaults::UNPRIVILEGED_PARTITION_SIZE,
        }
    }
}

/// Root configuration for one simulation run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use pagesim_core::config::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.cache.frames, 5);
/// assert!(!config.general.show_process);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use pagesim_core::config::{PolicyKind, Selection, SimConfig};
///
/// let json = r#"{
///     "general": { "show_process": true, "max_calls": 100 },
///     "cache": { "frames": 8, "seed": 42 },
///     "selection": { "One": "LRU" }
/// }"#;
///
/// let config: SimConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.cache.frames, 8);
/// assert_eq!(config.selection, Selection::One(PolicyKind::Lru));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimConfig {
    /// General simulation options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Cache geometry and seed.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Which policies to run.
    #[serde(default)]
    pub selection: Selection,
}

impl SimConfig {
    /// Resolves the frame count the engine will actually use.
    ///
    /// Values below 1 are clamped to 1; values above
    /// [`defaults::MAX_FRAMES`] are rejected. When the selection includes
    /// LFRU, counts below the combined partition capacity are raised to it
    /// and the raise is reported as `Some(raised_to)` so the caller can
    /// record the adjusted configuration. The raise is not an error.
    pub fn effective_frames(&self) -> Result<(usize, Option<usize>), SimError> {
        let mut frames = self.cache.frames.max(1);
        if frames > defaults::MAX_FRAMES {
            return Err(SimError::FrameCount {
                requested: frames,
                max: defaults::MAX_FRAMES,
            });
        }
        let mut adjusted = None;
        if self.selection.includes_lfru() {
            let floor = self.cache.privileged + self.cache.unprivileged;
            if frames < floor {
                frames = floor;
                adjusted = Some(floor);
            }
        }
        Ok((frames, adjusted))
    }
}
