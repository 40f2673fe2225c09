//! Optimal (Belady) replacement.

use crate::common::PageId;
use crate::policy::EvictionPolicy;
use crate::sim::FrameStore;

/// Evicts the resident page whose next reference is farthest away.
///
/// Looking into the future makes this unimplementable in a real memory
/// manager, but in a simulation it yields the minimum achievable fault
/// count and serves as the baseline the practical policies are judged
/// against.
///
/// Cost: each fault scans the remaining suffix once per resident page,
/// O(frames x remaining). Fine for the sequence lengths this crate
/// targets; a precomputed next-use index would not change any trace.
#[derive(Debug, Default)]
pub struct Optimal;

impl Optimal {
    /// Create a new Optimal policy.
    pub fn new() -> Self {
        Optimal
    }
}

impl EvictionPolicy for Optimal {
    fn victim(&mut self, store: &FrameStore, remaining: &[PageId]) -> PageId {
        // Scan residents in store order; strict `>` keeps the first
        // page among tied maxima, which fixes the tie-break to
        // insertion order.
        let mut candidates = store.iter();
        let mut victim = candidates
            .next()
            .expect("victim requested from an empty frame store");
        let mut farthest = next_use(victim, remaining);

        for page in candidates {
            let next = next_use(page, remaining);
            if next > farthest {
                victim = page;
                farthest = next;
            }
        }

        victim
    }
}

/// Index of `page`'s next occurrence in the unprocessed suffix, or
/// `usize::MAX` if it never occurs again.
fn next_use(page: PageId, remaining: &[PageId]) -> usize {
    remaining
        .iter()
        .position(|&r| r == page)
        .unwrap_or(usize::MAX)
}
