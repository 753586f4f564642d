// IV Rank: position of the current value within its trailing min-max range.

/// `(current - window_min) / (window_max - window_min) * 100`.
///
/// Returns NaN when the window has zero width. The result is not clamped;
/// a `current` outside `[window_min, window_max]` yields a rank outside
/// `[0, 100]`.
pub fn iv_rank(current: f64, window_min: f64, window_max: f64) -> f64 {
    if window_max == window_min {
        return f64::NAN;
    }
    (current - window_min) / (window_max - window_min) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_at_window_edges() {
        assert_eq!(iv_rank(10.0, 10.0, 50.0), 0.0);
        assert_eq!(iv_rank(50.0, 10.0, 50.0), 100.0);
    }

    #[test]
    fn test_rank_midpoint() {
        assert!((iv_rank(30.0, 10.0, 50.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_inside_window_stays_in_bounds() {
        for current in [10.0, 17.5, 25.0, 42.0, 50.0] {
            let rank = iv_rank(current, 10.0, 50.0);
            assert!((0.0..=100.0).contains(&rank), "rank {} out of bounds", rank);
        }
    }

    #[test]
    fn test_rank_outside_window_not_clamped() {
        assert!(iv_rank(60.0, 10.0, 50.0) > 100.0);
        assert!(iv_rank(5.0, 10.0, 50.0) < 0.0);
    }

    #[test]
    fn test_rank_zero_width_window_is_nan() {
        assert!(iv_rank(42.0, 42.0, 42.0).is_nan());
    }
}
