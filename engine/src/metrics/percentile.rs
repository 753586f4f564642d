// IV Percentile: share of trailing periods at or below the current value.

/// `count(close <= current) / len * 100`.
///
/// `current` is itself one of the closes under normal use, so the result is
/// always at least `100 / len`. Callers must not pass an empty slice; the
/// metrics entry point rejects empty series before reaching here.
pub fn iv_percentile(closes: &[f64], current: f64) -> f64 {
    let periods_lower = closes.iter().filter(|&&close| close <= current).count();
    periods_lower as f64 / closes.len() as f64 * 100.0
}
