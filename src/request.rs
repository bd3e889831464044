//! Caller-facing simulation requests.
//!
//! Deserializes the loosely-typed request body used by front ends
//! (`CurrentHeadPosition`, `RequestQueue`, ...) and turns it into engine
//! input. Parsing is forgiving in the same way everywhere: a numeric field
//! that is not a plain run of ASCII digits falls back to its default, and
//! queue tokens that are not plain digits are dropped.

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::warn;

use crate::config::{SimulationConfig, DEFAULT_SPEED_PER_TRACK_MS, DEFAULT_TOTAL_TRACKS};
use crate::error::Result;
use crate::models::{Algorithm, Direction, Track};
use crate::scheduler::{DiskScheduler, SimulationReport};
use crate::validation::{validate_request, ValidationResult};

/// A JSON value as sent by a front end.
///
/// Booleans and objects land in `Other` and never parse as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON integer.
    Integer(i64),
    /// A JSON non-integral number.
    Float(f64),
    /// A JSON string.
    Text(String),
    /// A JSON array.
    List(Vec<FieldValue>),
    /// Anything else (booleans, objects).
    Other(IgnoredAny),
}

impl FieldValue {
    /// Textual form, trimmed. Lists join their items with commas.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Integer(v) => v.to_string(),
            FieldValue::Float(v) => v.to_string(),
            FieldValue::Text(s) => s.trim().to_string(),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::as_text)
                .collect::<Vec<_>>()
                .join(","),
            FieldValue::Other(_) => String::new(),
        }
    }
}

/// A simulation request in the front-end wire format.
///
/// # Example
/// ```
/// use u_diskseek::SimulationRequest;
///
/// let request: SimulationRequest = serde_json::from_str(r#"{
///     "CurrentHeadPosition": "53",
///     "RequestQueue": "98, 183, 37, 122, 14, 124, 65, 67",
///     "Algorithm": "FCFS (First-Come, First-Served)"
/// }"#).unwrap();
///
/// let report = request.run().unwrap();
/// assert_eq!(report.algorithm_results.total_movements, 640);
/// assert_eq!(report.total_seek_time_ms, 6400);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequest {
    /// Initial head position. Defaults to 0.
    #[serde(rename = "CurrentHeadPosition", default)]
    pub head: Option<FieldValue>,
    /// Disk size. Defaults to 200.
    #[serde(rename = "TotalNumberOfTracks", default)]
    pub total_tracks: Option<FieldValue>,
    /// Per-track seek cost (ms). Defaults to 10.
    #[serde(rename = "SpeedPerTrackMs", default)]
    pub speed_per_track_ms: Option<FieldValue>,
    /// Comma-separated track list, or a JSON array of tracks.
    #[serde(rename = "RequestQueue", default)]
    pub request_queue: Option<FieldValue>,
    /// Algorithm name or alias.
    #[serde(rename = "Algorithm", default)]
    pub algorithm: String,
    /// "Left" or "Right"; takes precedence over `direction_of_head_movement`.
    #[serde(rename = "Direction", default)]
    pub direction: Option<String>,
    /// Older spelling of `Direction`.
    #[serde(rename = "DirectionOfHeadMovement", default)]
    pub direction_of_head_movement: Option<String>,
}

impl SimulationRequest {
    /// Initial head position, or 0 if missing or malformed.
    pub fn head(&self) -> Track {
        parse_field(self.head.as_ref())
            .and_then(|v| Track::try_from(v).ok())
            .unwrap_or(0)
    }

    /// Disk geometry and timing, with defaults for anything malformed.
    pub fn config(&self) -> SimulationConfig {
        SimulationConfig {
            total_tracks: parse_field(self.total_tracks.as_ref()).unwrap_or(DEFAULT_TOTAL_TRACKS),
            speed_per_track_ms: parse_field(self.speed_per_track_ms.as_ref())
                .unwrap_or(DEFAULT_SPEED_PER_TRACK_MS),
        }
    }

    /// The request queue with malformed tokens dropped.
    pub fn requests(&self) -> Vec<Track> {
        self.request_queue
            .as_ref()
            .map(|v| parse_request_queue(&v.as_text()))
            .unwrap_or_default()
    }

    /// Sweep direction; anything other than "left" means Right.
    pub fn direction(&self) -> Direction {
        self.direction
            .as_deref()
            .or(self.direction_of_head_movement.as_deref())
            .map(Direction::parse)
            .unwrap_or_default()
    }

    /// Resolves the algorithm selector.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownAlgorithm`](crate::ScheduleError::UnknownAlgorithm).
    pub fn algorithm(&self) -> Result<Algorithm> {
        self.algorithm.parse()
    }

    /// Checks the parsed head and queue against the parsed disk size.
    pub fn validate(&self) -> ValidationResult {
        validate_request(self.head(), &self.requests(), self.config().total_tracks)
    }

    /// Runs the simulation described by this request.
    ///
    /// Does not validate track ranges; call [`validate`](Self::validate)
    /// first to reject out-of-range input.
    pub fn run(&self) -> Result<SimulationReport> {
        let scheduler = DiskScheduler::new().with_config(self.config());
        scheduler.simulate(&self.algorithm, self.head(), &self.requests(), self.direction())
    }
}

/// Parses a comma-separated track list.
///
/// Tokens are trimmed; any token that is not a non-empty run of ASCII
/// digits (signs, decimals, words) is skipped.
///
/// ```
/// use u_diskseek::parse_request_queue;
///
/// assert_eq!(parse_request_queue("98, 183,x, -4, 37,,"), vec![98, 183, 37]);
/// ```
pub fn parse_request_queue(input: &str) -> Vec<Track> {
    let mut dropped = 0usize;
    let tracks: Vec<Track> = input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let parsed = parse_digits(token).and_then(|v| Track::try_from(v).ok());
            if parsed.is_none() {
                dropped += 1;
            }
            parsed
        })
        .collect();
    if dropped > 0 {
        warn!(dropped, kept = tracks.len(), "dropped malformed request tokens");
    }
    tracks
}

fn parse_field(value: Option<&FieldValue>) -> Option<u64> {
    parse_digits(&value?.as_text())
}

fn parse_digits(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
