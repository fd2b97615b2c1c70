//! Configuration tests: selector codes, frame-count resolution, and JSON
//! deserialization.

use pagesim_core::config::{defaults, PolicyKind, Selection, SimConfig};
use pagesim_core::common::SimError;

use crate::common::config_for;

// ══════════════════════════════════════════════════════════
// 1. Selector codes
// ══════════════════════════════════════════════════════════

/// Every catalogue entry round-trips through its one-character code.
#[test]
fn every_code_maps_to_its_policy() {
    for kind in PolicyKind::ALL {
        assert_eq!(PolicyKind::from_code(kind.code()), Some(kind));
        assert_eq!(Selection::from_code(kind.code()).ok(), Some(Selection::One(kind)));
    }
}

/// Codes are case-significant: `m` is MFU while `M` is MRU, and `f`/`F`
/// split the same way.
#[test]
fn codes_are_case_significant() {
    assert_eq!(PolicyKind::from_code('m'), Some(PolicyKind::Mfu));
    assert_eq!(PolicyKind::from_code('M'), Some(PolicyKind::Mru));
    assert_eq!(PolicyKind::from_code('f'), Some(PolicyKind::Lfru));
    assert_eq!(PolicyKind::from_code('F'), Some(PolicyKind::Fifo));
}

/// `a` selects every policy.
#[test]
fn code_a_selects_all() {
    let selection = Selection::from_code('a').expect("all");
    assert_eq!(selection, Selection::All);
    for kind in PolicyKind::ALL {
        assert!(selection.selects(kind));
    }
}

/// A single-policy selection excludes the other eleven.
#[test]
fn single_selection_excludes_others() {
    let selection = Selection::One(PolicyKind::Clock);
    assert!(selection.selects(PolicyKind::Clock));
    assert!(!selection.selects(PolicyKind::Lru));
    assert!(!selection.includes_lfru());
}

/// An unknown code is a configuration error naming the offender.
#[test]
fn unknown_code_rejected() {
    match Selection::from_code('x') {
        Err(SimError::UnknownPolicyCode('x')) => {}
        other => panic!("expected UnknownPolicyCode, got {:?}", other),
    }
}

// ══════════════════════════════════════════════════════════
// 2. Frame-count resolution
// ══════════════════════════════════════════════════════════

/// Zero frames clamp to the one-frame minimum instead of erroring.
#[test]
fn zero_frames_clamped_to_one() {
    let config = config_for(Selection::One(PolicyKind::Lru), 0);
    assert_eq!(config.effective_frames().expect("frames"), (1, None));
}

/// Counts above the hard bound are rejected.
#[test]
fn oversized_frame_count_rejected() {
    let config = config_for(Selection::One(PolicyKind::Lru), defaults::MAX_FRAMES + 1);
    match config.effective_frames() {
        Err(SimError::FrameCount { requested, max }) => {
            assert_eq!(requested, defaults::MAX_FRAMES + 1);
            assert_eq!(max, defaults::MAX_FRAMES);
        }
        other => panic!("expected FrameCount, got {:?}", other),
    }
}

/// Selecting LFRU raises a small frame count to the combined partition
/// capacity and reports the adjustment.
#[test]
fn lfru_floor_raises_frames() {
    let floor = defaults::PRIVILEGED_PARTITION_SIZE + defaults::UNPRIVILEGED_PARTITION_SIZE;
    let config = config_for(Selection::One(PolicyKind::Lfru), 3);
    assert_eq!(config.effective_frames().expect("frames"), (floor, Some(floor)));
}

/// ALL includes LFRU, so the floor applies there too.
#[test]
fn all_selection_also_raised() {
    let floor = defaults::PRIVILEGED_PARTITION_SIZE + defaults::UNPRIVILEGED_PARTITION_SIZE;
    let config = config_for(Selection::All, 2);
    assert_eq!(config.effective_frames().expect("frames"), (floor, Some(floor)));
}

/// A non-LFRU selection keeps small frame counts as requested.
#[test]
fn non_lfru_selection_not_raised() {
    let config = config_for(Selection::One(PolicyKind::Fifo), 3);
    assert_eq!(config.effective_frames().expect("frames"), (3, None));
}

/// A frame count already above the floor is untouched.
#[test]
fn ample_frames_not_adjusted() {
    let config = config_for(Selection::One(PolicyKind::Lfru), 64);
    assert_eq!(config.effective_frames().expect("frames"), (64, None));
}

// ══════════════════════════════════════════════════════════
// 3. JSON deserialization
// ══════════════════════════════════════════════════════════

/// An empty object deserializes to the documented defaults.
#[test]
fn empty_json_is_all_defaults() {
    let config: SimConfig = serde_json::from_str("{}").expect("parse");
    assert_eq!(config.cache.frames, defaults::FRAMES);
    assert_eq!(config.cache.seed, defaults::RNG_SEED);
    assert_eq!(config.selection, Selection::All);
    assert_eq!(config.general.max_calls, defaults::MAX_CALLS);
}

/// Explicit sections override their defaults; untouched fields keep them.
#[test]
fn partial_json_overrides_defaults() {
    let json = r#"{
        "general": { "show_process": true },
        "cache": { "frames": 8, "seed": 42 },
        "selection": { "One": "AGING" }
    }"#;
    let config: SimConfig = serde_json::from_str(json).expect("parse");
    assert!(config.general.show_process);
    assert!(!config.general.debug);
    assert_eq!(config.cache.frames, 8);
    assert_eq!(config.cache.privileged, defaults::PRIVILEGED_PARTITION_SIZE);
    assert_eq!(config.selection, Selection::One(PolicyKind::Aging));
}
