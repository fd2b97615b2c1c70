//! CLOCK (second-chance) policy tests.

use pagesim_core::cache::PolicyState;
use pagesim_core::config::PolicyKind;
use pagesim_core::policies::{Access, ClockPolicy, ReplacementPolicy};

use crate::common::{counts, victims, Ctx};

/// Deterministic sweep over a small mixed trace: two hits, six misses.
///
/// Worked by hand: the table fills with 0,1,2 (bits set), 0 and 1 hit,
/// then 3 clears every bit on its sweep and evicts slot 0; 4 and the
/// final 0 each find the next clear bit immediately.
#[test]
fn mixed_trace_counts() {
    assert_eq!(counts(PolicyKind::Clock, 3, &[0, 1, 2, 0, 1, 3, 4, 0]), (2, 6));
}

/// A set reference bit buys one revolution: the re-referenced page
/// survives an eviction that claims its clear-bit neighbours.
#[test]
fn reference_bit_grants_second_chance() {
    // t=3 clears all bits and evicts page 0; t=4 re-sets page 1's bit,
    // so the t=5 sweep passes 1 and takes page 2 instead.
    let evicted = victims(PolicyKind::Clock, 3, &[0, 1, 2, 3, 1, 4]);
    assert_eq!(evicted, vec![0, 2]);
}

/// With every bit set the sweep terminates within one revolution and
/// takes the frame it started on.
#[test]
fn full_bits_terminate_in_one_revolution() {
    let mut policy = ClockPolicy::new();
    let mut state = PolicyState::new(3);
    let pages = [0, 1, 2, 3];
    let mut ctx = Ctx::new(&pages);

    for (t, &page) in pages.iter().enumerate() {
        policy.step(&mut state, page, &mut ctx.at(t));
    }
    // All bits were set by insertion; the sweep cleared 0..2 and evicted
    // slot 0, leaving the hand just past it.
    assert_eq!(state.victim_log.len(), 1);
    assert_eq!(state.victim_log[0].index, 0);
    assert_eq!(policy.hand(), 1);
}

/// Empty slots are consumed in index order before the hand ever sweeps.
#[test]
fn empty_slots_fill_before_sweeping() {
    let mut policy = ClockPolicy::new();
    let mut state = PolicyState::new(3);
    let mut ctx = Ctx::new(&[0, 1]);

    assert_eq!(policy.step(&mut state, 0, &mut ctx.at(0)), Access::Fault);
    assert_eq!(policy.step(&mut state, 1, &mut ctx.at(1)), Access::Fault);
    assert_eq!(state.table[0].page, 0);
    assert_eq!(state.table[1].page, 1);
    assert!(state.table[2].is_empty());
    assert_eq!(policy.hand(), 0);
}

/// A hit only sets the reference bit; residency is untouched.
#[test]
fn hit_sets_bit_only() {
    let mut policy = ClockPolicy::new();
    let mut state = PolicyState::new(2);
    let mut ctx = Ctx::new(&[4, 4]);

    policy.step(&mut state, 4, &mut ctx.at(0));
    state.table[0].extra = 0;
    assert_eq!(policy.step(&mut state, 4, &mut ctx.at(1)), Access::Hit);
    assert_eq!(state.table[0].extra, 1);
    assert_eq!(state.resident_pages(), vec![4]);
}
