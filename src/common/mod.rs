//! Common types shared across pagesim.
//!
//! This module contains the fundamental primitives used throughout the
//! codebase:
//! - Error types
//! - The page identifier

pub mod error;
mod page_id;

pub use error::{Error, Result};
pub use page_id::PageId;
