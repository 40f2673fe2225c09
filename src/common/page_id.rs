//! Page identifier type.

use std::fmt;

/// Identifies a logical page in a reference sequence.
///
/// A page number carries no meaning beyond equality: the simulator never
/// translates addresses, it only tracks which identifiers are resident.
/// `u32` comfortably covers classroom examples and trace-file workloads
/// alike.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page = PageId::new(42);
/// assert_eq!(page.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl fmt::Display for PageId {
    /// Prints the bare number, so trace rows render as `[3, 4, 1]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
