//! Random workload generation.
//!
//! Produces head positions and request queues uniformly distributed over
//! the disk, for simulations and strategy comparisons. Generation is
//! driven by a caller-supplied RNG, so seeded RNGs give reproducible
//! workloads.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::models::{Algorithm, Direction, ScheduleResult, Track};

/// A head position and request queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Initial head position.
    pub head: Track,
    /// Pending requests in arrival order.
    pub requests: Vec<Track>,
}

impl Workload {
    /// Runs an algorithm on this workload.
    pub fn run(&self, algorithm: Algorithm, direction: Direction) -> ScheduleResult {
        algorithm.schedule(self.head, &self.requests, direction)
    }
}

/// Generates uniformly random workloads over `0..total_tracks`.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadGenerator {
    upper: Track,
}

impl WorkloadGenerator {
    /// Creates a generator for a disk with `total_tracks` tracks.
    ///
    /// A zero-track disk is treated as a single track 0.
    pub fn new(total_tracks: u64) -> Self {
        let upper = Track::try_from(total_tracks).unwrap_or(Track::MAX).max(1);
        Self { upper }
    }

    /// Creates a generator sized from a configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.total_tracks)
    }

    /// A uniformly random track.
    pub fn random_track<R: Rng>(&self, rng: &mut R) -> Track {
        rng.random_range(0..self.upper)
    }

    /// A uniformly random head position.
    pub fn random_head<R: Rng>(&self, rng: &mut R) -> Track {
        self.random_track(rng)
    }

    /// A queue of `len` random tracks; duplicates are possible.
    pub fn generate_queue<R: Rng>(&self, rng: &mut R, len: usize) -> Vec<Track> {
        (0..len).map(|_| self.random_track(rng)).collect()
    }

    /// A random head plus a queue of `len` requests.
    pub fn generate<R: Rng>(&self, rng: &mut R, len: usize) -> Workload {
        let head = self.random_head(rng);
        let requests = self.generate_queue(rng, len);
        Workload { head, requests }
    }
}
