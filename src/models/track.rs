//! Track numbers and the seek distance primitive.

/// A track (cylinder) number.
///
/// Conceptually in `[0, total_tracks)`, but the engine never enforces the
/// bound. Range checks belong to [`crate::validation`].
pub type Track = i64;

/// Head movement between two tracks: `|from - to|`.
///
/// Never overflows, even across the full `i64` range.
#[inline]
pub fn seek_distance(from: Track, to: Track) -> u64 {
    from.abs_diff(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_distance_symmetric() {
        assert_eq!(seek_distance(53, 98), 45);
        assert_eq!(seek_distance(98, 53), 45);
        assert_eq!(seek_distance(7, 7), 0);
    }

    #[test]
    fn test_seek_distance_extremes() {
        assert_eq!(seek_distance(i64::MIN, i64::MAX), u64::MAX);
    }
}
