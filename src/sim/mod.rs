//! The simulation engine and its supporting types.
//!
//! # Components
//! - [`FrameStore`] - The fixed-capacity set of resident pages
//! - [`simulate`] / [`simulate_all`] / [`simulate_with`] - Engine entry points
//! - [`TraceRecord`] / [`SimulationTrace`] - The engine's output

mod engine;
mod frame_store;
mod trace;

pub use engine::{simulate, simulate_all, simulate_with};
pub use frame_store::FrameStore;
pub use trace::{SimulationTrace, TraceRecord};
