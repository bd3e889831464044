//! Disk-head scheduling simulation.
//!
//! Given a starting head position and a queue of track requests, computes
//! the order in which the requests are serviced, the head-movement
//! sequence, and aggregate seek statistics. Pure simulation over integer
//! track numbers; no device I/O.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Track`, `Direction`, `Algorithm`,
//!   `ScheduleResult`
//! - **`strategies`**: FCFS, SSTF, SCAN (LOOK) and C-SCAN (circular LOOK)
//! - **`scheduler`**: Dispatch by name, movement aggregation, cost projection
//! - **`request`**: Lenient front-end request parsing
//! - **`validation`**: Track-range checks against the disk size
//! - **`workload`**: Random workload generation
//!
//! # Example
//!
//! ```
//! use u_diskseek::{compute, Direction};
//!
//! let r = compute("SSTF", 50, &[10, 22, 20, 2, 40, 6], Direction::Right).unwrap();
//! assert_eq!(r.sequence, vec![50, 40, 22, 20, 10, 6, 2]);
//! assert_eq!(r.total_movement, 48);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Teorey & Pinkerton (1972), "A Comparative Analysis of Disk Scheduling Policies"

pub mod config;
pub mod error;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod strategies;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{Result, ScheduleError};
pub use models::{seek_distance, Algorithm, Direction, ScheduleResult, Track};
pub use request::{parse_request_queue, SimulationRequest};
pub use scheduler::{compute, DiskScheduler, SimulationReport};
