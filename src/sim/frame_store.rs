//! Frame store - the fixed-capacity collection of resident pages.

use crate::common::PageId;

/// Ordered, fixed-capacity collection of resident page identifiers.
///
/// The order is the insertion order of the currently resident pages and
/// is policy-significant: FIFO evicts the head, and LRU/Optimal break
/// ties by whichever resident page an in-order scan reaches first.
/// Trace snapshots render in the same order.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - No duplicate pages
///
/// The preconditions on [`insert`](FrameStore::insert) and
/// [`evict`](FrameStore::evict) are engine invariants, not runtime
/// conditions; violating them panics.
#[derive(Debug)]
pub struct FrameStore {
    /// Resident pages, oldest insertion first.
    pages: Vec<PageId>,

    /// Maximum number of resident pages. May be zero.
    capacity: usize,
}

impl FrameStore {
    /// Create an empty store with room for `capacity` pages.
    ///
    /// `capacity` comes straight from user input and may be far larger
    /// than the working set, so nothing is reserved up front; the page
    /// vector grows only as pages actually fault in.
    pub fn new(capacity: usize) -> Self {
        Self {
            pages: Vec::new(),
            capacity,
        }
    }

    /// Exact membership test.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.pages.contains(&page)
    }

    /// Whether every frame is occupied. Always true for zero capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no pages are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// The fixed frame count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a page at the tail of the insertion order.
    ///
    /// # Panics
    /// Panics if the store is full or the page is already resident.
    pub fn insert(&mut self, page: PageId) {
        assert!(self.pages.len() < self.capacity, "insert into a full frame store");
        assert!(!self.contains(page), "page {page} is already resident");
        self.pages.push(page);
    }

    /// Remove a resident page, preserving the relative order of the rest.
    ///
    /// # Panics
    /// Panics if the page is not resident.
    pub fn evict(&mut self, page: PageId) {
        let index = self
            .pages
            .iter()
            .position(|&p| p == page)
            .unwrap_or_else(|| panic!("evicting page {page} which is not resident"));
        self.pages.remove(index);
    }

    /// Iterate resident pages in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Owned copy of the current contents, in order.
    ///
    /// Does not alias internal state; trace records hold these
    /// snapshots indefinitely.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.pages.clone()
    }
}
