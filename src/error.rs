//! Engine error type.

use thiserror::Error;

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors surfaced by the scheduling engine.
///
/// Every strategy is total over well-formed input, so the only failure
/// is a caller asking for an algorithm that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScheduleError {
    /// The algorithm selector matched no canonical strategy or alias.
    #[error("unknown algorithm selected: {0}")]
    UnknownAlgorithm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_message() {
        let err = ScheduleError::UnknownAlgorithm("LOOK".into());
        assert_eq!(err.to_string(), "unknown algorithm selected: LOOK");
    }
}
