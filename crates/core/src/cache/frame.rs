//! Single cache slot.
//!
//! A `Frame` holds one page plus the metadata the policies repurpose:
//! `extra` serves as the CLOCK reference bit, the NFU hit count, the AGING
//! shift register, or the FIFO/LRU insertion and recency tick, depending on
//! which policy owns the table. `wall_time` is refreshed on metadata
//! touches but is display garnish only; every ordering decision uses the
//! logical counters.

use std::time::{SystemTime, UNIX_EPOCH};

/// Sentinel page number for a slot holding no page.
pub const EMPTY: i64 = -1;

/// One cache slot.
///
/// Frames are created when a [`PolicyState`](super::PolicyState) or
/// [`Partition`](super::Partition) is built and are only mutated in place
/// afterwards; `index` is assigned once and never changes.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Slot position within its container, assigned once.
    pub index: usize,
    /// Page held, or [`EMPTY`].
    pub page: i64,
    /// Epoch milliseconds of the most recent metadata touch (display only).
    pub wall_time: u64,
    /// Generic per-policy integer (reference bit, hit count, aging
    /// register, or insertion/recency tick).
    pub extra: u64,
    /// Hit counter for the frequency-based policies.
    pub frequency: u64,
    /// Logical tick of the most recent use (LFU tie-breaks, LFRU).
    pub last_used: u64,
}

impl Frame {
    /// Creates an empty frame at the given slot position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            page: EMPTY,
            wall_time: now_millis(),
            extra: 0,
            frequency: 0,
            last_used: 0,
        }
    }

    /// True when the frame holds no page.
    pub fn is_empty(&self) -> bool {
        self.page == EMPTY
    }

    /// Returns the frame to its empty state, keeping its index.
    pub fn clear(&mut self) {
        self.page = EMPTY;
        self.wall_time = now_millis();
        self.extra = 0;
        self.frequency = 0;
        self.last_used = 0;
    }

    /// Installs a page with zeroed metadata; the caller then applies the
    /// policy's insertion rule.
    pub fn install(&mut self, page: i64) {
        self.page = page;
        self.wall_time = now_millis();
        self.extra = 0;
        self.frequency = 0;
        self.last_used = 0;
    }

    /// Refreshes the display timestamp.
    pub fn touch(&mut self) {
        self.wall_time = now_millis();
    }
}

/// Milliseconds since the UNIX epoch, saturating to 0 on clock skew.
fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
