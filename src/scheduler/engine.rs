//! Algorithm dispatch.

use tracing::{debug, warn};

use super::{CostProjection, SimulationReport};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::models::{Algorithm, Direction, ScheduleResult, Track};
use crate::strategies::{CScan, Fcfs, Scan, SeekStrategy, Sstf};

impl Algorithm {
    /// The strategy implementing this algorithm.
    pub fn strategy(self) -> &'static dyn SeekStrategy {
        match self {
            Algorithm::Fcfs => &Fcfs,
            Algorithm::Sstf => &Sstf,
            Algorithm::Scan => &Scan,
            Algorithm::CScan => &CScan,
        }
    }

    /// Runs this algorithm. Infallible once the algorithm is resolved.
    pub fn schedule(self, head: Track, requests: &[Track], direction: Direction) -> ScheduleResult {
        debug!(
            algorithm = self.name(),
            head,
            queue_len = requests.len(),
            %direction,
            "computing seek schedule"
        );
        self.strategy().schedule(head, requests, direction)
    }
}

/// Resolves `algorithm` by name or alias and computes its schedule.
///
/// # Errors
/// [`ScheduleError::UnknownAlgorithm`](crate::ScheduleError::UnknownAlgorithm)
/// if the name matches no canonical algorithm.
///
/// # Example
/// ```
/// use u_diskseek::{compute, Direction};
///
/// let r = compute("FCFS", 53, &[98, 183, 37, 122, 14, 124, 65, 67], Direction::Right).unwrap();
/// assert_eq!(r.total_movement, 640);
/// ```
pub fn compute(
    algorithm: &str,
    head: Track,
    requests: &[Track],
    direction: Direction,
) -> Result<ScheduleResult> {
    let resolved = resolve(algorithm)?;
    Ok(resolved.schedule(head, requests, direction))
}

fn resolve(name: &str) -> Result<Algorithm> {
    name.parse()
        .inspect_err(|_| warn!(algorithm = name, "rejecting unknown algorithm"))
}

/// Runs every canonical algorithm on the same input.
///
/// Results come back in [`Algorithm::ALL`] order.
pub fn compare_all(
    head: Track,
    requests: &[Track],
    direction: Direction,
) -> Vec<(Algorithm, ScheduleResult)> {
    Algorithm::ALL
        .iter()
        .map(|&a| (a, a.schedule(head, requests, direction)))
        .collect()
}

/// The entry with the least total movement; the first wins on ties.
pub fn best_of(results: &[(Algorithm, ScheduleResult)]) -> Option<&(Algorithm, ScheduleResult)> {
    results.iter().min_by_key(|(_, r)| r.total_movement)
}

/// Scheduling engine bound to a simulation configuration.
///
/// The configuration only affects cost projection; visit order depends
/// solely on the algorithm, head, queue, and direction.
///
/// # Example
///
/// ```
/// use u_diskseek::{DiskScheduler, Direction, SimulationConfig};
///
/// let scheduler = DiskScheduler::new()
///     .with_config(SimulationConfig::default().with_speed_per_track_ms(2));
/// let report = scheduler
///     .simulate("SCAN (Elevator)", 53, &[98, 183, 37], Direction::Left)
///     .unwrap();
/// assert_eq!(report.algorithm_results.sequence, vec![53, 37, 98, 183]);
/// assert_eq!(report.total_seek_time_ms, (16 + 146) * 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiskScheduler {
    config: SimulationConfig,
}

impl DiskScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the simulation configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Same as the free [`compute`] function.
    pub fn compute(
        &self,
        algorithm: &str,
        head: Track,
        requests: &[Track],
        direction: Direction,
    ) -> Result<ScheduleResult> {
        compute(algorithm, head, requests, direction)
    }

    /// Computes a schedule and projects its seek time.
    pub fn simulate(
        &self,
        algorithm: &str,
        head: Track,
        requests: &[Track],
        direction: Direction,
    ) -> Result<SimulationReport> {
        let resolved = resolve(algorithm)?;
        Ok(self.simulate_with(resolved, head, requests, direction))
    }

    /// Like [`simulate`](Self::simulate) with an already-resolved algorithm.
    pub fn simulate_with(
        &self,
        algorithm: Algorithm,
        head: Track,
        requests: &[Track],
        direction: Direction,
    ) -> SimulationReport {
        let result = algorithm.schedule(head, requests, direction);
        let projection = CostProjection::project(&result, self.config.speed_per_track_ms);
        SimulationReport::new(algorithm, &result, &projection)
    }
}
