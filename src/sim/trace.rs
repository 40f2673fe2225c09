//! Trace records and the rendered report.

use std::fmt;

use crate::common::PageId;

/// One row of a simulation trace.
///
/// Immutable once appended. `resident` is an owned snapshot taken after
/// the step's fault handling, so later steps cannot disturb it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// 1-indexed position in the reference sequence.
    pub step: usize,

    /// Resident pages after this step, in insertion order.
    pub resident: Vec<PageId>,

    /// Whether this reference missed.
    pub fault: bool,
}

/// The complete output of one simulation run.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let references = [1, 2, 1].map(PageId::new);
/// let trace = simulate(Policy::Lru, &references, 2);
/// assert_eq!(trace.total_faults, 2);
/// assert_eq!(trace.hit_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationTrace {
    /// One record per reference, in order.
    pub steps: Vec<TraceRecord>,

    /// Number of records with `fault == true`.
    pub total_faults: usize,
}

impl SimulationTrace {
    /// Fraction of references that faulted (0.0 to 1.0).
    ///
    /// Zero for an empty trace rather than dividing by zero.
    pub fn fault_rate(&self) -> f64 {
        if self.steps.is_empty() {
            0.0
        } else {
            self.total_faults as f64 / self.steps.len() as f64
        }
    }

    /// Number of references that hit.
    pub fn hit_count(&self) -> usize {
        self.steps.len() - self.total_faults
    }
}

impl fmt::Display for SimulationTrace {
    /// Renders the classic text report:
    ///
    /// ```text
    /// Step | Frames | Page Fault
    ///    1 | [1] | Yes
    ///    2 | [1, 2] | Yes
    ///
    /// Total Page Faults: 2
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step | Frames | Page Fault")?;
        for record in &self.steps {
            write!(f, "{:4} | [", record.step)?;
            for (i, page) in record.resident.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{page}")?;
            }
            writeln!(f, "] | {}", if record.fault { "Yes" } else { "No" })?;
        }
        writeln!(f)?;
        writeln!(f, "Total Page Faults: {}", self.total_faults)
    }
}
