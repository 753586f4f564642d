// Time-window helpers shared by the engine and the GUI.
use chrono::{DateTime, TimeZone, Utc};

/// Milliseconds in a 365-day year, matching the exchange's trailing-year
/// lookback convention (no leap-day adjustment).
pub const YEAR_MS: i64 = 1000 * 60 * 60 * 24 * 365;

/// Default bucket width of the DVOL series, in seconds (12 hours).
pub const DEFAULT_RESOLUTION_SECS: u32 = 43_200;

/// Trailing-365-day window ending at `now`, as (start, end) epoch
/// milliseconds.
pub fn trailing_year_window(now: DateTime<Utc>) -> (i64, i64) {
    let end_ms = now.timestamp_millis();
    (end_ms - YEAR_MS, end_ms)
}

/// Converts an epoch-millisecond timestamp to `DateTime<Utc>`.
///
/// Timestamps outside chrono's representable range fall back to the epoch;
/// the exchange never produces such values.
pub fn datetime_from_ms(timestamp_ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_trailing_year_window_width() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let (start, end) = trailing_year_window(now);
        assert_eq!(end - start, YEAR_MS);
        assert_eq!(end, now.timestamp_millis());
    }

    #[test]
    fn test_datetime_from_ms() {
        let dt = datetime_from_ms(1_700_000_000_000);
        assert_eq!(dt.year(), 2023);
        assert_eq!(dt.timestamp_millis(), 1_700_000_000_000);
    }
}
