//! Initial sweep direction for SCAN-family strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which way the head sweeps first.
///
/// Only SCAN and C-SCAN consult it; FCFS and SSTF ignore it.
///
/// Parsing is lenient: `"left"` in any case selects [`Direction::Left`],
/// every other value (including an empty string) selects
/// [`Direction::Right`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Direction {
    /// Toward lower track numbers.
    Left,
    /// Toward higher track numbers.
    #[default]
    Right,
}

impl Direction {
    /// Parses a direction, falling back to `Right` for anything unrecognized.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("left") {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// True when the first sweep goes toward track 0.
    #[inline]
    pub fn is_descending_first(self) -> bool {
        self == Direction::Left
    }

    /// Display name ("Left" / "Right").
    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

impl From<&str> for Direction {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Direction {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
