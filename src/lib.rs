//! pagesim - a page-replacement policy simulator.
//!
//! Given a reference sequence and a fixed number of physical frames,
//! pagesim replays the sequence under one of three eviction policies -
//! FIFO, LRU, or Optimal (Belady) - and reports, step by step, which
//! pages are resident and which references fault.
//!
//! # Architecture
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                        pagesim                         │
//! ├────────────────────────────────────────────────────────┤
//! │  input      free-form text → PageIds + frame count     │
//! │                           ↓                            │
//! │  sim        engine loop + FrameStore + trace types     │
//! │                           ↓                            │
//! │  policy     FIFO | LRU | Optimal   [swappable]         │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error)
//! - [`sim`] - Simulation engine, frame store, and trace types
//! - [`policy`] - The three eviction policies and the policy seam
//! - [`input`] - Text parsing adapter
//!
//! # Quick Start
//! ```
//! use pagesim::{simulate, PageId, Policy};
//!
//! let references: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5].map(PageId::new).into();
//!
//! let trace = simulate(Policy::Optimal, &references, 3);
//! assert_eq!(trace.total_faults, 5);
//!
//! // Render the classic "Step | Frames | Page Fault" report.
//! println!("{trace}");
//! ```

pub mod common;
pub mod input;
pub mod policy;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result};
pub use policy::{EvictionPolicy, Fifo, Lru, Optimal, Policy};
pub use sim::{simulate, simulate_all, simulate_with, FrameStore, SimulationTrace, TraceRecord};
