//! LFRU two-partition substate.
//!
//! LFRU splits its resident set into a privileged partition under LRU
//! discipline and an unprivileged partition under LFU discipline. Each
//! partition is a fixed-size bag of frames; capacity is set at creation
//! and never changes. A page resides in at most one partition at a time.

use super::frame::Frame;
use crate::common::TickSource;

/// Fixed-size bag of frames with LRU-or-LFU local victim rules.
#[derive(Debug, Clone)]
pub struct Partition {
    frames: Vec<Frame>,
}

impl Partition {
    /// Creates a partition of `size` empty frames.
    pub fn new(size: usize) -> Self {
        Self {
            frames: (0..size).map(Frame::new).collect(),
        }
    }

    /// Partition capacity in frames.
    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    /// Read access to the frames, index order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// True when at least one frame is empty.
    pub fn has_space(&self) -> bool {
        self.frames.iter().any(Frame::is_empty)
    }

    /// True when some frame holds `page`.
    pub fn contains(&self, page: i64) -> bool {
        self.find(page).is_some()
    }

    /// Slot index of the frame holding `page`, if resident.
    pub fn find(&self, page: i64) -> Option<usize> {
        self.frames.iter().position(|f| f.page == page)
    }

    /// Installs `page` into the first empty frame with `frequency = 1` and
    /// a fresh tick. Returns false when the partition is full.
    pub fn insert(&mut self, page: i64, ticks: &mut TickSource) -> bool {
        match self.frames.iter_mut().find(|f| f.is_empty()) {
            Some(frame) => {
                frame.install(page);
                frame.frequency = 1;
                frame.last_used = ticks.next();
                true
            }
            None => false,
        }
    }

    /// Clears the frame holding `page`, if resident.
    pub fn remove(&mut self, page: i64) {
        if let Some(idx) = self.find(page) {
            self.frames[idx].clear();
        }
    }

    /// Refreshes the recency tick of the frame holding `page` (privileged
    /// hit rule).
    pub fn touch(&mut self, page: i64, ticks: &mut TickSource) {
        if let Some(idx) = self.find(page) {
            let tick = ticks.next();
            self.frames[idx].last_used = tick;
            self.frames[idx].touch();
        }
    }

    /// Resident frame with the smallest recency tick.
    pub fn lru_victim(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, frame) in self.frames.iter().enumerate() {
            if frame.is_empty() {
                continue;
            }
            match best {
                Some(b) if self.frames[b].last_used <= frame.last_used => {}
                _ => best = Some(idx),
            }
        }
        best
    }

    /// Resident frame with the smallest frequency, ties broken by the
    /// smallest recency tick.
    pub fn lfu_victim(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, frame) in self.frames.iter().enumerate() {
            if frame.is_empty() {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    let cur = &self.frames[b];
                    frame.frequency < cur.frequency
                        || (frame.frequency == cur.frequency && frame.last_used < cur.last_used)
                }
            };
            if better {
                best = Some(idx);
            }
        }
        best
    }

    /// Pages resident in this partition, slot order.
    pub fn resident_pages(&self) -> Vec<i64> {
        self.frames
            .iter()
            .filter(|f| !f.is_empty())
            .map(|f| f.page)
            .collect()
    }

    /// Clears the frame at `idx` and returns a snapshot of its pre-eviction
    /// contents.
    pub fn evict(&mut self, idx: usize) -> Frame {
        let snapshot = self.frames[idx].clone();
        self.frames[idx].clear();
        snapshot
    }
}

/// The privileged (LRU) and unprivileged (LFU) partitions of one LFRU run.
#[derive(Debug, Clone)]
pub struct PartitionPair {
    /// Hot tier, LRU-managed.
    pub privileged: Partition,
    /// Cold tier, LFU-managed.
    pub unprivileged: Partition,
}

impl PartitionPair {
    /// Creates both partitions at their configured capacities.
    pub fn new(privileged: usize, unprivileged: usize) -> Self {
        Self {
            privileged: Partition::new(privileged),
            unprivileged: Partition::new(unprivileged),
        }
    }

    /// Moves the privileged LRU victim into the unprivileged partition,
    /// evicting the unprivileged LFU victim first when it is full.
    ///
    /// Returns a snapshot of the frame that actually left residency, if
    /// any. The demoted page itself stays resident (it only changes tier)
    /// and re-enters the cold tier with `frequency = 1`.
    pub fn demote(&mut self, ticks: &mut TickSource) -> Option<Frame> {
        let idx = self.privileged.lru_victim()?;
        let demoted_page = self.privileged.frames()[idx].page;
        self.privileged.evict(idx);

        let mut evicted = None;
        if !self.unprivileged.has_space() {
            if let Some(victim) = self.unprivileged.lfu_victim() {
                evicted = Some(self.unprivileged.evict(victim));
            }
        }
        self.unprivileged.insert(demoted_page, ticks);
        evicted
    }

    /// Pages resident across both partitions, privileged first.
    pub fn resident_pages(&self) -> Vec<i64> {
        let mut pages = self.privileged.resident_pages();
        pages.extend(self.unprivileged.resident_pages());
        pages
    }
}
