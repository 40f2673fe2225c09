//! FIFO (First-In-First-Out) replacement.

use crate::common::PageId;
use crate::policy::EvictionPolicy;
use crate::sim::FrameStore;

/// Evicts the page that has been resident longest.
///
/// The frame store already keeps residents in insertion order, so the
/// victim is always the head; FIFO needs no bookkeeping of its own.
/// Re-referencing a resident page does not refresh its position.
#[derive(Debug, Default)]
pub struct Fifo;

impl Fifo {
    /// Create a new FIFO policy.
    pub fn new() -> Self {
        Fifo
    }
}

impl EvictionPolicy for Fifo {
    fn victim(&mut self, store: &FrameStore, _remaining: &[PageId]) -> PageId {
        store
            .iter()
            .next()
            .expect("victim requested from an empty frame store")
    }
}
