//! SCAN (elevator), LOOK variant.

use super::{SeekStrategy, SortedSweep};
use crate::models::{Direction, ScheduleResult, Track};
use crate::scheduler::MovementTracker;

/// Elevator sweep that reverses at the last pending request.
///
/// The head moves monotonically in the starting direction through every
/// request on that side, turns at the outermost one, and sweeps back
/// through the rest. It never travels to track 0 or the last track unless
/// a request sits there.
///
/// Requests equal to the head position are serviced on the ascending
/// sweep.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scan;

impl SeekStrategy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn schedule(&self, head: Track, requests: &[Track], direction: Direction) -> ScheduleResult {
        let sweep = SortedSweep::new(head, requests);
        let mut tracker = MovementTracker::start(head, requests.len());

        let down = sweep.below().iter().rev().copied();
        let up = sweep.above().iter().copied();
        if direction.is_descending_first() {
            tracker.visit_all(down);
            tracker.visit_all(up);
        } else {
            tracker.visit_all(up);
            tracker.visit_all(down);
        }

        tracker.finish()
    }

    fn description(&self) -> &'static str {
        "SCAN (Elevator)"
    }
}
