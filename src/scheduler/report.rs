//! Caller-facing simulation reports.

use serde::{Deserialize, Serialize};

use super::CostProjection;
use crate::models::{Algorithm, ScheduleResult, Track};

/// Presentation form of a [`ScheduleResult`].
///
/// `average_movements` is rounded to two decimal places, ties to even;
/// use the underlying result when the exact value matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Head position followed by each serviced request.
    pub sequence: Vec<Track>,
    /// Total head movement (tracks).
    pub total_movements: u64,
    /// Average movement per actual move, rounded to hundredths.
    pub average_movements: f64,
}

impl From<&ScheduleResult> for ScheduleReport {
    fn from(result: &ScheduleResult) -> Self {
        Self {
            sequence: result.sequence.clone(),
            total_movements: result.total_movement,
            average_movements: round_hundredths(result.average_movement),
        }
    }
}

/// Full output of one simulation: schedule plus projected seek time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Strategy that produced the schedule.
    pub algorithm: Algorithm,
    /// Visit order and movement statistics.
    pub algorithm_results: ScheduleReport,
    /// Total movement multiplied by the per-track cost (ms).
    pub total_seek_time_ms: u64,
    /// Average movement multiplied by the per-track cost (ms), unrounded.
    pub average_seek_time_ms: f64,
}

impl SimulationReport {
    /// Builds a report from a schedule and its cost projection.
    pub fn new(algorithm: Algorithm, result: &ScheduleResult, projection: &CostProjection) -> Self {
        Self {
            algorithm,
            algorithm_results: ScheduleReport::from(result),
            total_seek_time_ms: projection.total_seek_time_ms,
            average_seek_time_ms: projection.average_seek_time_ms,
        }
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
