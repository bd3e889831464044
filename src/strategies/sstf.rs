//! Shortest Seek Time First.

use super::SeekStrategy;
use crate::models::{seek_distance, Direction, ScheduleResult, Track};
use crate::scheduler::MovementTracker;

/// Shortest Seek Time First.
///
/// Greedy nearest-neighbour tour: from the pending requests, always
/// service the one closest to the current head. When several are
/// equidistant, the one earliest in the pending list wins.
///
/// # Complexity
/// O(n²) for n requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sstf;

impl SeekStrategy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn schedule(&self, head: Track, requests: &[Track], _direction: Direction) -> ScheduleResult {
        let mut pending = requests.to_vec();
        let mut tracker = MovementTracker::start(head, requests.len());

        while let Some(idx) = nearest_index(tracker.head(), &pending) {
            // Remove by position so duplicate tracks are serviced separately.
            let next = pending.remove(idx);
            tracker.visit(next);
        }

        tracker.finish()
    }

    fn description(&self) -> &'static str {
        "SSTF (Shortest Seek Time First)"
    }
}

/// Index of the pending request closest to `head`.
///
/// `min_by_key` keeps the first of equal minima, which gives the
/// earliest-in-list tie-break.
fn nearest_index(head: Track, pending: &[Track]) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|&(_, &track)| seek_distance(head, track))
        .map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_queue() {
        let r = Sstf.schedule(53, &[98, 183, 37, 122, 14, 124, 65, 67], Direction::Right);
        assert_eq!(r.sequence, vec![53, 65, 67, 37, 14, 98, 122, 124, 183]);
        assert_eq!(r.total_movement, 236);
    }

    #[test]
    fn test_nearest_neighbour_order() {
        let r = Sstf.schedule(50, &[10, 22, 20, 2, 40, 6], Direction::Right);
        assert_eq!(r.sequence, vec![50, 40, 22, 20, 10, 6, 2]);
        // 10 + 18 + 2 + 10 + 4 + 4
        assert_eq!(r.total_movement, 48);
        assert_eq!(r.moves, 6);
        assert!((r.average_movement - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_tie_goes_to_earliest_pending() {
        let r = Sstf.schedule(50, &[60, 40], Direction::Right);
        assert_eq!(r.sequence, vec![50, 60, 40]);

        let r = Sstf.schedule(50, &[40, 60], Direction::Right);
        assert_eq!(r.sequence, vec![50, 40, 60]);
    }

    #[test]
    fn test_tie_break_reproducible() {
        let queue = [30, 70, 10, 90];
        let first = Sstf.schedule(50, &queue, Direction::Right);
        for _ in 0..10 {
            assert_eq!(Sstf.schedule(50, &queue, Direction::Right), first);
        }
    }

    #[test]
    fn test_duplicates_serviced_individually() {
        let r = Sstf.schedule(10, &[12, 12, 10], Direction::Right);
        assert_eq!(r.sequence, vec![10, 10, 12, 12]);
        assert_eq!(r.total_movement, 2);
        assert_eq!(r.moves, 1);
    }

    #[test]
    fn test_caller_queue_untouched() {
        let queue = vec![5, 1, 9];
        let _ = Sstf.schedule(4, &queue, Direction::Right);
        assert_eq!(queue, vec![5, 1, 9]);
    }

    #[test]
    fn test_empty_queue() {
        assert_eq!(
            Sstf.schedule(7, &[], Direction::Left),
            ScheduleResult::identity(7)
        );
    }

    #[test]
    fn test_nearest_index() {
        assert_eq!(nearest_index(0, &[]), None);
        assert_eq!(nearest_index(5, &[1, 9, 3]), Some(2));
        assert_eq!(nearest_index(5, &[3, 7]), Some(0));
    }
}
