//! First-Come, First-Served.

use super::SeekStrategy;
use crate::models::{Direction, ScheduleResult, Track};
use crate::scheduler::MovementTracker;

/// First-Come, First-Served.
///
/// Services requests strictly in submission order. Fair, but ignores
/// head position entirely, so total movement is usually the worst of
/// the four strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SeekStrategy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, head: Track, requests: &[Track], _direction: Direction) -> ScheduleResult {
        let mut tracker = MovementTracker::start(head, requests.len());
        tracker.visit_all(requests.iter().copied());
        tracker.finish()
    }

    fn description(&self) -> &'static str {
        "FCFS (First-Come, First-Served)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUEUE: [Track; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_textbook_queue() {
        let r = Fcfs.schedule(53, &QUEUE, Direction::Right);
        assert_eq!(r.sequence, vec![53, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(r.total_movement, 640);
        assert_eq!(r.moves, 8);
        assert!((r.average_movement - 80.0).abs() < 1e-10);
    }

    #[test]
    fn test_direction_ignored() {
        let right = Fcfs.schedule(53, &QUEUE, Direction::Right);
        let left = Fcfs.schedule(53, &QUEUE, Direction::Left);
        assert_eq!(right, left);
    }

    #[test]
    fn test_repeated_requests_count_once_per_move() {
        // 5 → 5 (0) → 9 (4) → 9 (0)
        let r = Fcfs.schedule(5, &[5, 9, 9], Direction::Right);
        assert_eq!(r.sequence, vec![5, 5, 9, 9]);
        assert_eq!(r.total_movement, 4);
        assert_eq!(r.moves, 1);
        assert!((r.average_movement - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_queue() {
        let r = Fcfs.schedule(42, &[], Direction::Right);
        assert_eq!(r, ScheduleResult::identity(42));
    }
}
