//! Seek-ordering strategies.
//!
//! Each strategy turns a head position and a request queue into a
//! [`ScheduleResult`]. All four are total functions: any finite queue and
//! any head produce a deterministic, terminating result.
//!
//! # Strategies
//!
//! - **FCFS**: queue order, untouched
//! - **SSTF**: greedy nearest request, ties to the earliest in the queue
//! - **SCAN**: sweep one way to the extreme request, then reverse (LOOK)
//! - **C-SCAN**: sweep one way, jump to the opposite extreme, keep going
//!
//! SCAN and C-SCAN turn at the outermost *requested* track, never at the
//! physical disk boundary, and the C-SCAN jump is charged as an ordinary
//! seek.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

mod cscan;
mod fcfs;
mod scan;
mod sstf;

pub use cscan::CScan;
pub use fcfs::Fcfs;
pub use scan::Scan;
pub use sstf::Sstf;

use crate::models::{Direction, ScheduleResult, Track};
use std::fmt::Debug;

/// A disk-head scheduling strategy.
///
/// Implementations never mutate the caller's queue; strategies that need
/// to reorder or consume requests work on their own copy.
pub trait SeekStrategy: Send + Sync + Debug {
    /// Short name (e.g., "SSTF").
    fn name(&self) -> &'static str;

    /// Computes the visit order and seek statistics.
    ///
    /// `direction` selects the first sweep; strategies without a sweep
    /// ignore it.
    fn schedule(&self, head: Track, requests: &[Track], direction: Direction) -> ScheduleResult;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Requests sorted around the head's insertion point.
///
/// Equivalent to sorting `requests ∪ {head}` and locating the head: the
/// head sits at `split`, before any request equal to it.
#[derive(Debug)]
struct SortedSweep {
    tracks: Vec<Track>,
    split: usize,
}

impl SortedSweep {
    fn new(head: Track, requests: &[Track]) -> Self {
        let mut tracks = requests.to_vec();
        tracks.sort_unstable();
        let split = tracks.partition_point(|&t| t < head);
        Self { tracks, split }
    }

    /// Requests strictly below the head, ascending.
    fn below(&self) -> &[Track] {
        &self.tracks[..self.split]
    }

    /// Requests at or above the head, ascending.
    fn above(&self) -> &[Track] {
        &self.tracks[self.split..]
    }
}
