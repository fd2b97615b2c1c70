//! OPTIMAL (Belady) policy tests.

use pagesim_core::config::PolicyKind;

use crate::common::{counts, victims};

/// The victim is the resident page whose next use is farthest away; a
/// page never referenced again beats any finite distance.
#[test]
fn evicts_page_never_used_again() {
    // At t=3 the futures are: 0 -> t=4, 1 -> t=5, 2 -> never.
    let evicted = victims(PolicyKind::Optimal, 3, &[0, 1, 2, 3, 0, 1]);
    assert_eq!(evicted, vec![2]);
}

/// Among pages with finite next uses, the farthest one goes.
#[test]
fn evicts_farthest_next_use() {
    // At t=3 the futures are: 0 -> t=4, 1 -> t=6, 2 -> t=5, so 1 goes
    // first; the final reference to 1 then evicts dead slot 0.
    let evicted = victims(PolicyKind::Optimal, 3, &[0, 1, 2, 7, 0, 2, 1]);
    assert_eq!(evicted, vec![1, 0]);
}

/// When every resident page is dead, the tie goes to the smallest slot
/// index.
#[test]
fn dead_heat_breaks_to_smallest_index() {
    // None of 0, 1, 2 appears after t=3; slot 0 holds page 0.
    let evicted = victims(PolicyKind::Optimal, 3, &[0, 1, 2, 3]);
    assert_eq!(evicted, vec![0]);
}

/// On the mixed eight-reference trace the look-ahead needs at most five
/// misses: three cold, then one each for pages 3 and 4 (evicting pages
/// with no remaining uses), leaving the final 0 a hit.
#[test]
fn mixed_trace_stays_under_six_misses() {
    let (hits, misses) = counts(PolicyKind::Optimal, 3, &[0, 1, 2, 0, 1, 3, 4, 0]);
    assert!(misses <= 5, "OPTIMAL missed {} times", misses);
    assert_eq!(hits + misses, 8);
}
