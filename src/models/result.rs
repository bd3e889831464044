//! Schedule result (visit order plus seek statistics).

use serde::{Deserialize, Serialize};

use super::track::{seek_distance, Track};
use crate::scheduler::MovementTracker;

/// Outcome of one seek simulation.
///
/// `sequence[0]` is always the initial head position, followed by every
/// serviced request in visit order, so `sequence.len() == 1 + queue length`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Head position followed by each serviced request.
    pub sequence: Vec<Track>,
    /// Sum of `|current - next|` over consecutive pairs.
    pub total_movement: u64,
    /// `total_movement / moves`, or 0.0 when the head never moved.
    pub average_movement: f64,
    /// Number of transitions where the head position actually changed.
    pub moves: usize,
}

impl ScheduleResult {
    /// The result of servicing an empty queue: the head stays put.
    pub fn identity(head: Track) -> Self {
        Self {
            sequence: vec![head],
            total_movement: 0,
            average_movement: 0.0,
            moves: 0,
        }
    }

    /// Recomputes statistics for an arbitrary visit order.
    ///
    /// The first element is taken as the head. An empty slice yields a
    /// result with an empty sequence and zero movement.
    pub fn from_sequence(sequence: &[Track]) -> Self {
        match sequence.split_first() {
            Some((&head, rest)) => {
                let mut tracker = MovementTracker::start(head, rest.len());
                tracker.visit_all(rest.iter().copied());
                tracker.finish()
            }
            None => Self {
                sequence: Vec::new(),
                total_movement: 0,
                average_movement: 0.0,
                moves: 0,
            },
        }
    }

    /// Initial head position.
    pub fn head(&self) -> Option<Track> {
        self.sequence.first().copied()
    }

    /// Where the head rests after the last serviced request.
    pub fn final_position(&self) -> Option<Track> {
        self.sequence.last().copied()
    }

    /// Number of serviced requests (excludes the initial head entry).
    pub fn serviced_count(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    /// Serviced requests in visit order, without the initial head.
    pub fn serviced(&self) -> &[Track] {
        self.sequence.get(1..).unwrap_or(&[])
    }

    /// Per-step seek distances.
    pub fn step_distances(&self) -> impl Iterator<Item = u64> + '_ {
        self.sequence.windows(2).map(|w| seek_distance(w[0], w[1]))
    }

    /// Largest single seek in the trace.
    pub fn max_step(&self) -> u64 {
        self.step_distances().max().unwrap_or(0)
    }
}
