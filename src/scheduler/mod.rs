//! Engine façade, movement aggregation, and cost projection.
//!
//! # Flow
//!
//! 1. Resolve the algorithm name to a canonical [`Algorithm`](crate::models::Algorithm).
//! 2. Run its strategy; each serviced request goes through a
//!    [`MovementTracker`], which accumulates total and average movement.
//! 3. Optionally project the movement into seek time with a per-track
//!    cost ([`CostProjection`]) and wrap everything in a [`SimulationReport`].
//!
//! Everything here is stateless: each call builds its own working data
//! and can run on any thread.

mod engine;
mod projection;
mod report;
mod tracker;

pub use engine::{best_of, compare_all, compute, DiskScheduler};
pub use projection::CostProjection;
pub use report::{ScheduleReport, SimulationReport};
pub use tracker::MovementTracker;
