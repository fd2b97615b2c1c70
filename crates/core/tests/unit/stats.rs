//! Reporter formatting tests.
//!
//! The summary line and page-table dump are presentation only, but their
//! shapes are part of the output contract: six-decimal ratio and time,
//! underscore for an empty slot, fixed row labels.

use pagesim_core::cache::PolicyState;
use pagesim_core::config::{PolicyKind, Selection};
use pagesim_core::stats::{page_table, summary};

use crate::common::run_engine;

/// The summary line carries label, frames, counts, and the six-decimal
/// ratio and time fields.
#[test]
fn summary_line_fields() {
    let engine = run_engine(Selection::One(PolicyKind::Lru), 10, &[0, 1, 0, 1]);
    let run = engine.run_for(PolicyKind::Lru).expect("run");
    let line = summary(run);

    assert!(line.starts_with("LRU Algorithm\n"));
    assert!(line.contains("Frames in Mem: 10"));
    assert!(line.contains("Hits: 2"));
    assert!(line.contains("Misses: 2"));
    assert!(line.contains("Hit Ratio: 0.500000"));
    assert!(line.contains("Total Execution Time: 0."));
    assert!(line.contains("seconds"));
}

/// A fresh table dumps underscores for every slot and all four row
/// labels.
#[test]
fn page_table_marks_empty_slots() {
    let state = PolicyState::new(3);
    let dump = page_table(&state.table);

    assert!(dump.contains("Frame #"));
    assert!(dump.contains("Page Ref"));
    assert!(dump.contains("Extra"));
    assert!(dump.contains("Time"));
    assert_eq!(dump.matches('_').count(), 3);
}

/// Resident pages replace their underscores.
#[test]
fn page_table_shows_resident_pages() {
    let engine = run_engine(Selection::One(PolicyKind::Fifo), 3, &[4, 9]);
    let run = engine.run_for(PolicyKind::Fifo).expect("run");
    let dump = page_table(&run.state.table);

    assert!(dump.contains('4'));
    assert!(dump.contains('9'));
    assert_eq!(dump.matches('_').count(), 1);
}
