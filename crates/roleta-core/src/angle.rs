//! Wheel geometry: segment layout and angle-to-winner decode
//!
//! The wheel is divided into `n` equal arcs laid out in increasing index
//! order starting at angle 0, proceeding in the positive rotation
//! direction. A fixed pointer sits at angle 0 outside the rotating frame.
//! `decode_index` is the exact inverse of that layout: it answers "which
//! arc is under the pointer" for a given accumulated rotation.

/// One full rotation in radians
pub const FULL_TURN: f64 = std::f64::consts::TAU;

/// Width of one candidate arc
#[inline]
pub fn segment_width(candidate_count: usize) -> f64 {
    FULL_TURN / candidate_count as f64
}

/// Reduce an accumulated rotation to `[0, 2π)`
#[inline]
pub fn normalize(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN)
}

/// Layout arc for a candidate index: `(start, end)` in wheel-local radians
pub fn segment_arc(index: usize, candidate_count: usize) -> (f64, f64) {
    let width = segment_width(candidate_count);
    let start = index as f64 * width;
    (start, start + width)
}

/// Decode the winning candidate index from an accumulated rotation.
///
/// The wheel rotates in the positive direction, so the arc under the
/// fixed pointer is found by mirroring the reduced rotation: a wheel
/// turned forward by `θ` presents the arc that started at `2π − θ`.
/// Pure in `(angle mod 2π, candidate_count)`; whole turns never change
/// the result.
pub fn decode_index(angle: f64, candidate_count: usize) -> usize {
    debug_assert!(candidate_count > 0, "decode requires at least one candidate");
    if candidate_count == 0 {
        return 0;
    }
    let normalized = (FULL_TURN - normalize(angle)).rem_euclid(FULL_TURN);
    (normalized / segment_width(candidate_count)) as usize % candidate_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_width() {
        assert_relative_eq!(segment_width(1), FULL_TURN);
        assert_relative_eq!(segment_width(4), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_normalize_reduces_turns() {
        // Whole turns reduce to (numerically) zero: the residue may land
        // on either side of the wrap point.
        let residue = normalize(FULL_TURN * 3.0);
        assert!(residue < 1e-9 || FULL_TURN - residue < 1e-9);

        assert_relative_eq!(normalize(FULL_TURN + 1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normalize(-1.0), FULL_TURN - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decode_whole_turns_are_invisible() {
        let n = 7;
        for k in [-3i64, -1, 0, 1, 2, 9] {
            let angle = 1.234 + k as f64 * FULL_TURN;
            assert_eq!(decode_index(angle, n), decode_index(1.234, n));
        }
    }

    #[test]
    fn test_decode_single_candidate_always_zero() {
        for angle in [0.0, 0.5, 3.0, FULL_TURN * 8.0 + 2.7, -4.2] {
            assert_eq!(decode_index(angle, 1), 0);
        }
    }

    #[test]
    fn test_decode_boundary_is_first_arc() {
        // Zero rotation leaves the arc starting at angle 0 under the pointer.
        assert_eq!(decode_index(0.0, 3), 0);
        assert_eq!(decode_index(FULL_TURN * 8.0, 3), 0);
    }

    #[test]
    fn test_decode_mirrors_layout() {
        // Rotating forward past one arc width brings the LAST arc under
        // the pointer, then the second-to-last, and so on.
        let n = 4;
        let width = segment_width(n);
        assert_eq!(decode_index(width * 0.5, n), n - 1);
        assert_eq!(decode_index(width * 1.5, n), n - 2);
        assert_eq!(decode_index(width * 3.5, n), 0);
    }

    #[test]
    fn test_decode_negative_angle_matches_residue() {
        let n = 5;
        let angle = 2.0;
        assert_eq!(decode_index(angle - FULL_TURN, n), decode_index(angle, n));
    }

    #[test]
    fn test_segment_arcs_tile_the_wheel() {
        let n = 6;
        let mut cursor = 0.0;
        for i in 0..n {
            let (start, end) = segment_arc(i, n);
            assert_relative_eq!(start, cursor, epsilon = 1e-12);
            cursor = end;
        }
        assert_relative_eq!(cursor, FULL_TURN, epsilon = 1e-12);
    }
}
