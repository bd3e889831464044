//! Movement aggregation.

use tracing::trace;

use crate::models::{seek_distance, ScheduleResult, Track};

/// Accumulates a visit sequence and its seek statistics.
///
/// Every strategy drives one of these: start at the head, `visit` each
/// serviced request in order, then `finish` into a [`ScheduleResult`].
///
/// Only transitions that change the head position count toward the
/// average; repeated visits to the same track cost nothing and are not
/// counted as moves.
#[derive(Debug, Clone)]
pub struct MovementTracker {
    head: Track,
    sequence: Vec<Track>,
    total: u64,
    moves: usize,
}

impl MovementTracker {
    /// Starts tracking at `head`, reserving room for `expected` visits.
    pub fn start(head: Track, expected: usize) -> Self {
        let mut sequence = Vec::with_capacity(expected + 1);
        sequence.push(head);
        Self {
            head,
            sequence,
            total: 0,
            moves: 0,
        }
    }

    /// Current head position.
    #[inline]
    pub fn head(&self) -> Track {
        self.head
    }

    /// Total movement so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Moves the head to `track`, returning the seek distance.
    pub fn visit(&mut self, track: Track) -> u64 {
        let distance = seek_distance(self.head, track);
        self.total = self.total.saturating_add(distance);
        if distance > 0 {
            self.moves += 1;
        }
        trace!(from = self.head, to = track, distance, "serviced request");
        self.head = track;
        self.sequence.push(track);
        distance
    }

    /// Visits each track in order.
    pub fn visit_all<I: IntoIterator<Item = Track>>(&mut self, tracks: I) {
        for track in tracks {
            self.visit(track);
        }
    }

    /// Consumes the tracker into a result.
    pub fn finish(self) -> ScheduleResult {
        let average_movement = if self.moves > 0 {
            self.total as f64 / self.moves as f64
        } else {
            0.0
        };
        ScheduleResult {
            sequence: self.sequence,
            total_movement: self.total,
            average_movement,
            moves: self.moves,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_accumulates() {
        let mut t = MovementTracker::start(53, 3);
        assert_eq!(t.visit(98), 45);
        assert_eq!(t.visit(98), 0);
        assert_eq!(t.visit(37), 61);
        assert_eq!(t.head(), 37);
        assert_eq!(t.total(), 106);

        let r = t.finish();
        assert_eq!(r.sequence, vec![53, 98, 98, 37]);
        assert_eq!(r.moves, 2);
        assert!((r.average_movement - 53.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_moves_average_zero() {
        let mut t = MovementTracker::start(4, 2);
        t.visit_all([4, 4]);
        let r = t.finish();
        assert_eq!(r.sequence, vec![4, 4, 4]);
        assert_eq!(r.total_movement, 0);
        assert_eq!(r.moves, 0);
        assert_eq!(r.average_movement, 0.0);
    }

    #[test]
    fn test_total_saturates() {
        let mut t = MovementTracker::start(i64::MIN, 2);
        t.visit(i64::MAX);
        t.visit(i64::MIN);
        assert_eq!(t.total(), u64::MAX);
    }
}
