//! Canonical scheduling algorithms and their accepted aliases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// One of the four canonical seek strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Algorithm {
    /// First-Come, First-Served.
    Fcfs,
    /// Shortest Seek Time First.
    Sstf,
    /// Elevator sweep (LOOK variant).
    Scan,
    /// Circular sweep (circular LOOK variant).
    CScan,
}

impl Algorithm {
    /// All canonical algorithms, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sstf,
        Algorithm::Scan,
        Algorithm::CScan,
    ];

    /// Every accepted selector, short and descriptive.
    ///
    /// Matching is case-insensitive after trimming surrounding whitespace.
    pub const ALIASES: &'static [(&'static str, Algorithm)] = &[
        ("FCFS", Algorithm::Fcfs),
        ("FCFS (First-Come, First-Served)", Algorithm::Fcfs),
        ("SSTF", Algorithm::Sstf),
        ("SSTF (Shortest Seek Time First)", Algorithm::Sstf),
        ("SCAN", Algorithm::Scan),
        ("SCAN (Elevator)", Algorithm::Scan),
        ("C-SCAN", Algorithm::CScan),
        ("C-SCAN (Circular SCAN)", Algorithm::CScan),
    ];

    /// Short name ("FCFS", "SSTF", "SCAN", "C-SCAN").
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sstf => "SSTF",
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        }
    }

    /// Descriptive name, as shown to end users.
    pub fn description(self) -> &'static str {
        self.strategy().description()
    }

    /// Aliases that select this algorithm.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        Self::ALIASES
            .iter()
            .filter(move |(_, a)| *a == self)
            .map(|(alias, _)| *alias)
    }

    /// Whether the initial sweep direction affects the visit order.
    pub fn is_direction_sensitive(self) -> bool {
        matches!(self, Algorithm::Scan | Algorithm::CScan)
    }
}

impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(key))
            .map(|(_, algorithm)| *algorithm)
            .ok_or_else(|| ScheduleError::UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.name().to_string()
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_and_descriptive_aliases() {
        assert_eq!("FCFS".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!(
            "FCFS (First-Come, First-Served)".parse::<Algorithm>().unwrap(),
            Algorithm::Fcfs
        );
        assert_eq!(
            "SSTF (Shortest Seek Time First)".parse::<Algorithm>().unwrap(),
            Algorithm::Sstf
        );
        assert_eq!("SCAN (Elevator)".parse::<Algorithm>().unwrap(), Algorithm::Scan);
        assert_eq!("C-SCAN".parse::<Algorithm>().unwrap(), Algorithm::CScan);
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        assert_eq!("  sstf ".parse::<Algorithm>().unwrap(), Algorithm::Sstf);
        assert_eq!("c-scan (circular scan)".parse::<Algorithm>().unwrap(), Algorithm::CScan);
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "LOOK".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, ScheduleError::UnknownAlgorithm("LOOK".into()));
        assert!("".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_every_algorithm_has_two_aliases() {
        for algorithm in Algorithm::ALL {
            let aliases: Vec<_> = algorithm.aliases().collect();
            assert_eq!(aliases, vec![algorithm.name(), algorithm.description()]);
        }
    }

    #[test]
    fn test_direction_sensitivity() {
        assert!(!Algorithm::Fcfs.is_direction_sensitive());
        assert!(!Algorithm::Sstf.is_direction_sensitive());
        assert!(Algorithm::Scan.is_direction_sensitive());
        assert!(Algorithm::CScan.is_direction_sensitive());
    }

    #[test]
    fn test_serde_uses_names() {
        assert_eq!(serde_json::to_string(&Algorithm::CScan).unwrap(), "\"C-SCAN\"");
        let a: Algorithm = serde_json::from_str("\"scan (elevator)\"").unwrap();
        assert_eq!(a, Algorithm::Scan);
        assert!(serde_json::from_str::<Algorithm>("\"N-STEP\"").is_err());
    }
}
