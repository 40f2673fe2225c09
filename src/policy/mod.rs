//! Eviction policy implementations.
//!
//! Each policy supplies only the parts of a simulation step that differ
//! between algorithms: an access hook and a victim choice. The shared
//! loop lives in [`crate::sim`].
//!
//! # Implementations
//! - [`Fifo`] - Evict the longest-resident page
//! - [`Lru`] - Evict the least recently touched page
//! - [`Optimal`] - Evict the page referenced farthest in the future

mod fifo;
mod lru;
mod optimal;

pub use fifo::Fifo;
pub use lru::Lru;
pub use optimal::Optimal;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, PageId};
use crate::sim::FrameStore;

/// Selects one of the three supported replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    Fifo,
    Lru,
    Optimal,
}

impl Policy {
    /// All supported policies, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// The conventional name of the policy.
    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Matches the three conventional names, case-insensitively.
    ///
    /// # Example
    /// ```
    /// use pagesim::Policy;
    ///
    /// assert_eq!("lru".parse::<Policy>().unwrap(), Policy::Lru);
    /// assert!("MRU".parse::<Policy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("FIFO") {
            Ok(Policy::Fifo)
        } else if name.eq_ignore_ascii_case("LRU") {
            Ok(Policy::Lru)
        } else if name.eq_ignore_ascii_case("Optimal") {
            Ok(Policy::Optimal)
        } else {
            Err(Error::UnknownPolicy(s.to_string()))
        }
    }
}

/// The per-policy half of the simulation.
///
/// The engine calls [`record_access`](EvictionPolicy::record_access)
/// for every reference, hit or miss, then
/// [`victim`](EvictionPolicy::victim) when a fault needs to reclaim a
/// frame. A policy instance serves exactly one run and is discarded
/// with it.
pub trait EvictionPolicy {
    /// Observe a reference before residency is checked.
    ///
    /// Default is a no-op; LRU uses this to stamp recency on every
    /// touch, not only on faults. `step` is the 1-indexed position in
    /// the reference sequence.
    fn record_access(&mut self, _page: PageId, _step: u64) {}

    /// Choose the resident page to evict.
    ///
    /// Called only when the store is full and non-empty. `remaining` is
    /// the unprocessed suffix of the reference sequence (everything
    /// after the current reference); only Optimal looks at it. Must
    /// return a page that is currently resident.
    fn victim(&mut self, store: &FrameStore, remaining: &[PageId]) -> PageId;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::Fifo.name(), "FIFO");
        assert_eq!(Policy::Lru.name(), "LRU");
        assert_eq!(Policy::Optimal.name(), "Optimal");
        assert_eq!(format!("{}", Policy::Optimal), "Optimal");
    }

    #[test]
    fn test_from_str_exact_names() {
        assert_eq!("FIFO".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("LRU".parse::<Policy>().unwrap(), Policy::Lru);
        assert_eq!("Optimal".parse::<Policy>().unwrap(), Policy::Optimal);
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("fifo".parse::<Policy>().unwrap(), Policy::Fifo);
        assert_eq!("  optimal  ".parse::<Policy>().unwrap(), Policy::Optimal);
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let err = "CLOCK".parse::<Policy>().unwrap_err();
        match err {
            Error::UnknownPolicy(name) => assert_eq!(name, "CLOCK"),
            other => panic!("expected UnknownPolicy, got {:?}", other),
        }
    }
}
