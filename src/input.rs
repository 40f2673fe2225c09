//! Parsing adapter between free-form text and the simulation core.
//!
//! The core never sees raw text. Whatever front end collects the
//! reference string and frame count funnels it through here first and
//! reports any [`Error`] to the user instead of starting a run.

use std::str::FromStr;

use crate::common::{Error, PageId, Result};
use crate::policy::Policy;
use crate::sim::{simulate, SimulationTrace};

/// Parse a whitespace-separated list of page numbers.
///
/// # Errors
/// - [`Error::MalformedInput`] for any token that is not a page number
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<u32>()
                .map(PageId::new)
                .map_err(|_| Error::MalformedInput(token.to_string()))
        })
        .collect()
}

/// Parse a frame count.
///
/// A negative count is a distinct error from non-numeric text: the
/// number parsed fine, it just cannot describe a number of frames.
///
/// # Errors
/// - [`Error::MalformedInput`] if the text is not a number
/// - [`Error::InvalidFrameCount`] if the number is negative
pub fn parse_frame_count(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let count = trimmed
        .parse::<i64>()
        .map_err(|_| Error::MalformedInput(trimmed.to_string()))?;
    if count < 0 {
        return Err(Error::InvalidFrameCount(count));
    }
    Ok(count as usize)
}

/// Parse all three inputs and run one simulation.
///
/// # Example
/// ```
/// let trace = pagesim::input::run("FIFO", "1 2 3 4 1 2 5", "3").unwrap();
/// assert_eq!(trace.total_faults, 7);
/// ```
pub fn run(algorithm: &str, references: &str, frame_count: &str) -> Result<SimulationTrace> {
    let policy = Policy::from_str(algorithm)?;
    let references = parse_references(references)?;
    let frames = parse_frame_count(frame_count)?;

    Ok(simulate(policy, &references, frames))
}
