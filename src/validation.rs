//! Input validation for seek simulations.
//!
//! The engine accepts any integers; these checks are for callers that
//! want to reject requests outside the simulated disk before scheduling.
//! Detects:
//! - A disk with zero tracks
//! - A head position outside `0..total_tracks`
//! - Negative request tracks
//! - Request tracks at or beyond `total_tracks`
//!
//! All problems are collected; validation does not stop at the first one.

use crate::models::Track;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The disk has no tracks.
    ZeroTracks,
    /// The head position is not a valid track.
    HeadOutOfRange,
    /// A request names a negative track.
    NegativeTrack,
    /// A request names a track at or beyond the last one.
    TrackOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a head position and request queue against the disk size.
///
/// Checks:
/// 1. `total_tracks > 0`
/// 2. `0 <= head < total_tracks`
/// 3. No request is negative
/// 4. No request is `>= total_tracks`
///
/// Upper-bound checks are skipped when `total_tracks` is zero, since
/// that is already reported.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(head: Track, requests: &[Track], total_tracks: u64) -> ValidationResult {
    let mut errors = Vec::new();

    if total_tracks == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroTracks,
            "Disk must have at least one track",
        ));
    }

    if !in_range(head, total_tracks) && (head < 0 || total_tracks > 0) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!("Head position {head} is outside 0..{total_tracks}"),
        ));
    }

    for (idx, &track) in requests.iter().enumerate() {
        if track < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeTrack,
                format!("Request #{idx} names negative track {track}"),
            ));
        } else if total_tracks > 0 && !in_range(track, total_tracks) {
            errors.push(ValidationError::new(
                ValidationErrorKind::TrackOutOfRange,
                format!("Request #{idx} names track {track}, beyond last track {}", total_tracks - 1),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn in_range(track: Track, total_tracks: u64) -> bool {
    u64::try_from(track).is_ok_and(|t| t < total_tracks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        assert!(validate_request(53, &[98, 183, 37, 0, 199], 200).is_ok());
        assert!(validate_request(0, &[], 1).is_ok());
    }

    #[test]
    fn test_zero_tracks() {
        let errors = validate_request(0, &[0, 5], 0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroTracks);
    }

    #[test]
    fn test_head_out_of_range() {
        let errors = validate_request(200, &[10], 200).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HeadOutOfRange);

        let errors = validate_request(-1, &[10], 200).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::HeadOutOfRange);
    }

    #[test]
    fn test_collects_all_track_errors() {
        let errors = validate_request(10, &[5, -3, 250, 200, 7], 200).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NegativeTrack,
                ValidationErrorKind::TrackOutOfRange,
                ValidationErrorKind::TrackOutOfRange,
            ]
        );
        assert!(errors[0].message.contains("#1"));
        assert!(errors[2].message.contains("199"));
    }

    #[test]
    fn test_negative_reported_even_with_zero_tracks() {
        let errors = validate_request(-5, &[-1], 0).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::ZeroTracks,
                ValidationErrorKind::HeadOutOfRange,
                ValidationErrorKind::NegativeTrack,
            ]
        );
    }
}
