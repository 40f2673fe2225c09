//! LRU (Least-Recently-Used) replacement.

use std::collections::HashMap;

use crate::common::PageId;
use crate::policy::EvictionPolicy;
use crate::sim::FrameStore;

/// Evicts the resident page touched least recently.
///
/// Recency is stamped on every reference, hit or miss: "least recently
/// used" is only meaningful if the clock advances on hits too. Entries
/// for evicted pages are left in the history; they are overwritten if
/// the page ever returns and are ignored otherwise.
#[derive(Debug, Default)]
pub struct Lru {
    /// Step index at which each page was last referenced.
    last_used: HashMap<PageId, u64>,
}

impl Lru {
    /// Create a new LRU policy with empty usage history.
    pub fn new() -> Self {
        Self {
            last_used: HashMap::new(),
        }
    }
}

impl EvictionPolicy for Lru {
    fn record_access(&mut self, page: PageId, step: u64) {
        self.last_used.insert(page, step);
    }

    fn victim(&mut self, store: &FrameStore, _remaining: &[PageId]) -> PageId {
        // Every resident page was stamped when it faulted in, so the
        // lookup cannot miss in practice. Ties are impossible: each
        // step stamps exactly one page, so `min_by_key` keeping the
        // first candidate is merely the documented scan order.
        store
            .iter()
            .min_by_key(|page| self.last_used.get(page).copied().unwrap_or(u64::MAX))
            .expect("victim requested from an empty frame store")
    }
}
