//! Seek-time projection from head movement.

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Seek time derived from a schedule and a per-track cost.
///
/// Pure multiplication; rotational latency and transfer time are not
/// modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostProjection {
    /// Time to cross one track (ms).
    pub speed_per_track_ms: u64,
    /// `total_movement * speed_per_track_ms`, saturating.
    pub total_seek_time_ms: u64,
    /// `average_movement * speed_per_track_ms`.
    pub average_seek_time_ms: f64,
}

impl CostProjection {
    /// Projects a schedule's movement into seek time.
    pub fn project(result: &ScheduleResult, speed_per_track_ms: u64) -> Self {
        Self {
            speed_per_track_ms,
            total_seek_time_ms: result.total_movement.saturating_mul(speed_per_track_ms),
            average_seek_time_ms: result.average_movement * speed_per_track_ms as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project() {
        let r = ScheduleResult::from_sequence(&[53, 98, 183]);
        let p = CostProjection::project(&r, 10);
        assert_eq!(p.total_seek_time_ms, 1300);
        assert!((p.average_seek_time_ms - 650.0).abs() < 1e-10);
    }

    #[test]
    fn test_project_zero_speed() {
        let r = ScheduleResult::from_sequence(&[0, 100]);
        let p = CostProjection::project(&r, 0);
        assert_eq!(p.total_seek_time_ms, 0);
        assert_eq!(p.average_seek_time_ms, 0.0);
    }

    #[test]
    fn test_project_saturates() {
        let r = ScheduleResult::from_sequence(&[0, i64::MAX]);
        let p = CostProjection::project(&r, u64::MAX);
        assert_eq!(p.total_seek_time_ms, u64::MAX);
    }
}
