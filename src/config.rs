//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Default number of tracks on the simulated disk.
pub const DEFAULT_TOTAL_TRACKS: u64 = 200;

/// Default time to cross one track (ms).
pub const DEFAULT_SPEED_PER_TRACK_MS: u64 = 10;

/// Disk geometry and timing used around the engine.
///
/// Neither value changes a visit order: `total_tracks` bounds validation
/// and workload generation, `speed_per_track_ms` drives cost projection.
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of tracks; valid track numbers are `0..total_tracks`.
    pub total_tracks: u64,
    /// Time to cross one track (ms).
    pub speed_per_track_ms: u64,
}

impl SimulationConfig {
    /// Sets the number of tracks.
    pub fn with_total_tracks(mut self, total_tracks: u64) -> Self {
        self.total_tracks = total_tracks;
        self
    }

    /// Sets the per-track seek cost.
    pub fn with_speed_per_track_ms(mut self, speed_per_track_ms: u64) -> Self {
        self.speed_per_track_ms = speed_per_track_ms;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_tracks: DEFAULT_TOTAL_TRACKS,
            speed_per_track_ms: DEFAULT_SPEED_PER_TRACK_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.total_tracks, 200);
        assert_eq!(c.speed_per_track_ms, 10);
    }

    #[test]
    fn test_builder() {
        let c = SimulationConfig::default()
            .with_total_tracks(5000)
            .with_speed_per_track_ms(3);
        assert_eq!(c.total_tracks, 5000);
        assert_eq!(c.speed_per_track_ms, 3);
    }

    #[test]
    fn test_partial_deserialize() {
        let c: SimulationConfig = serde_json::from_str(r#"{"total_tracks": 1024}"#).unwrap();
        assert_eq!(c.total_tracks, 1024);
        assert_eq!(c.speed_per_track_ms, DEFAULT_SPEED_PER_TRACK_MS);

        let c: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(c, SimulationConfig::default());
    }
}
