//! The shared simulation loop.
//!
//! All three policies run through the same loop; a policy only chooses
//! victims (and, in LRU's case, observes accesses). This is what
//! guarantees the identical trace format across policies.

use crate::common::PageId;
use crate::policy::{EvictionPolicy, Fifo, Lru, Optimal, Policy};
use crate::sim::{FrameStore, SimulationTrace, TraceRecord};

/// Run one named policy over a reference sequence.
///
/// A call is a pure function of its inputs: the frame store and any
/// policy bookkeeping are created here and dropped on return. An empty
/// sequence yields an empty trace. A frame count of zero makes every
/// reference fault without ever filling a frame.
///
/// # Example
/// ```
/// use pagesim::{simulate, PageId, Policy};
///
/// let references = [1, 2, 3, 4, 1, 2, 5].map(PageId::new);
/// let trace = simulate(Policy::Fifo, &references, 3);
/// assert_eq!(trace.total_faults, 7);
/// ```
pub fn simulate(policy: Policy, references: &[PageId], frame_count: usize) -> SimulationTrace {
    match policy {
        Policy::Fifo => simulate_with(Fifo::new(), references, frame_count),
        Policy::Lru => simulate_with(Lru::new(), references, frame_count),
        Policy::Optimal => simulate_with(Optimal::new(), references, frame_count),
    }
}

/// Run all three policies over the same input, independently.
///
/// Each run owns its own frame store and bookkeeping; results come back
/// in [`Policy::ALL`] order for side-by-side comparison.
pub fn simulate_all(references: &[PageId], frame_count: usize) -> Vec<(Policy, SimulationTrace)> {
    Policy::ALL
        .iter()
        .map(|&policy| (policy, simulate(policy, references, frame_count)))
        .collect()
}

/// Run the simulation loop with a caller-supplied eviction policy.
///
/// This is the seam the named policies plug into; custom
/// [`EvictionPolicy`] implementations get the same engine semantics and
/// trace format.
pub fn simulate_with<P: EvictionPolicy>(
    mut policy: P,
    references: &[PageId],
    frame_count: usize,
) -> SimulationTrace {
    let mut store = FrameStore::new(frame_count);
    let mut steps = Vec::with_capacity(references.len());
    let mut total_faults = 0;

    for (index, &page) in references.iter().enumerate() {
        // Trace rows are 1-indexed.
        let step = index + 1;
        policy.record_access(page, step as u64);

        let fault = !store.contains(page);
        if fault {
            total_faults += 1;
            if !store.is_full() {
                store.insert(page);
            } else if frame_count > 0 {
                let victim = policy.victim(&store, &references[index + 1..]);
                store.evict(victim);
                store.insert(page);
            }
            // frame_count == 0: the reference faults but there is
            // nothing to evict and nowhere to insert.
        }

        steps.push(TraceRecord {
            step,
            resident: store.snapshot(),
            fault,
        });
    }

    SimulationTrace {
        steps,
        total_faults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(pages: &[u32]) -> Vec<PageId> {
        pages.iter().map(|&p| PageId::new(p)).collect()
    }

    fn residents(trace: &SimulationTrace, step: usize) -> Vec<u32> {
        trace.steps[step - 1].resident.iter().map(|p| p.0).collect()
    }

    #[test]
    fn test_fifo_reference_scenario() {
        let references = refs(&[1, 2, 3, 4, 1, 2, 5]);
        let trace = simulate(Policy::Fifo, &references, 3);

        assert_eq!(trace.total_faults, 7);
        assert!(trace.steps.iter().all(|s| s.fault));
        assert_eq!(residents(&trace, 1), vec![1]);
        assert_eq!(residents(&trace, 2), vec![1, 2]);
        assert_eq!(residents(&trace, 3), vec![1, 2, 3]);
        assert_eq!(residents(&trace, 4), vec![2, 3, 4]);
        assert_eq!(residents(&trace, 5), vec![3, 4, 1]);
        assert_eq!(residents(&trace, 6), vec![4, 1, 2]);
        assert_eq!(residents(&trace, 7), vec![1, 2, 5]);
    }

    #[test]
    fn test_lru_reference_scenario() {
        let references = refs(&[1, 2, 3, 4, 1, 2, 5]);
        let trace = simulate(Policy::Lru, &references, 3);

        // On this input LRU happens to match FIFO step for step.
        assert_eq!(trace.total_faults, 7);
        assert_eq!(residents(&trace, 4), vec![2, 3, 4]);
        assert_eq!(residents(&trace, 5), vec![3, 4, 1]);
        assert_eq!(residents(&trace, 6), vec![4, 1, 2]);
        assert_eq!(residents(&trace, 7), vec![1, 2, 5]);
    }

    #[test]
    fn test_optimal_reference_scenario() {
        let references = refs(&[1, 2, 3, 4, 1, 2, 5]);
        let trace = simulate(Policy::Optimal, &references, 3);

        // Step 4: page 3 never recurs, so it is the victim.
        assert_eq!(residents(&trace, 4), vec![1, 2, 4]);
        // Steps 5 and 6 hit.
        assert!(!trace.steps[4].fault);
        assert!(!trace.steps[5].fault);
        // Step 7: nothing recurs; the tie goes to the oldest resident.
        assert_eq!(residents(&trace, 7), vec![2, 4, 5]);
        assert_eq!(trace.total_faults, 5);
    }

    #[test]
    fn test_empty_reference_sequence() {
        for policy in Policy::ALL {
            let trace = simulate(policy, &[], 3);
            assert!(trace.steps.is_empty());
            assert_eq!(trace.total_faults, 0);
        }
    }

    #[test]
    fn test_zero_frames_every_reference_faults() {
        let references = refs(&[1, 1, 2, 1]);
        for policy in Policy::ALL {
            let trace = simulate(policy, &references, 0);
            assert_eq!(trace.total_faults, 4);
            assert!(trace.steps.iter().all(|s| s.fault && s.resident.is_empty()));
        }
    }

    #[test]
    fn test_hits_leave_state_untouched() {
        let references = refs(&[1, 2, 1, 2, 1, 2]);
        for policy in Policy::ALL {
            let trace = simulate(policy, &references, 2);
            assert_eq!(trace.total_faults, 2);
            for step in 2..=6 {
                assert_eq!(residents(&trace, step), vec![1, 2]);
            }
        }
    }

    #[test]
    fn test_simulate_all_covers_every_policy() {
        let references = refs(&[1, 2, 3, 4, 1, 2, 5]);
        let results = simulate_all(&references, 3);

        let policies: Vec<Policy> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(policies, Policy::ALL);

        for (policy, trace) in &results {
            let expected = simulate(*policy, &references, 3);
            assert_eq!(*trace, expected);
        }
    }
}
