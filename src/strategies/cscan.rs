//! C-SCAN (circular SCAN), LOOK variant.

use super::{SeekStrategy, SortedSweep};
use crate::models::{Direction, ScheduleResult, Track};
use crate::scheduler::MovementTracker;

/// Circular sweep that wraps at the last pending request.
///
/// The head services everything in the starting direction, then jumps to
/// the outermost request on the opposite side and continues in the *same*
/// direction until it reaches its starting point.
///
/// The jump is charged as an ordinary `|from - to|` seek between the two
/// extreme requests, not as a full sweep of the disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct CScan;

impl SeekStrategy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn schedule(&self, head: Track, requests: &[Track], direction: Direction) -> ScheduleResult {
        let sweep = SortedSweep::new(head, requests);
        let mut tracker = MovementTracker::start(head, requests.len());

        if direction.is_descending_first() {
            tracker.visit_all(sweep.below().iter().rev().copied());
            tracker.visit_all(sweep.above().iter().rev().copied());
        } else {
            tracker.visit_all(sweep.above().iter().copied());
            tracker.visit_all(sweep.below().iter().copied());
        }

        tracker.finish()
    }

    fn description(&self) -> &'static str {
        "C-SCAN (Circular SCAN)"
    }
}
