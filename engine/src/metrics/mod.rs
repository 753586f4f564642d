// Volatility metrics module
pub mod percentile;
pub mod rank;

use crate::error::EngineError;
use shared::models::{Candle, VolMetrics, VolatilityPoint};
use shared::utils::datetime_from_ms;

/// Derives the current value, trailing min/max, IV Rank and IV Percentile
/// from one trailing-year series.
///
/// The series is assumed sorted ascending by time (the exchange returns it
/// that way); it is not re-sorted. An empty series is a hard error, every
/// other input produces a deterministic result.
pub fn compute(series: &[VolatilityPoint]) -> Result<VolMetrics, EngineError> {
    let last = series.last().ok_or(EngineError::EmptySeries)?;
    let current = last.close;

    let window_min = series.iter().map(|p| p.low).fold(f64::INFINITY, f64::min);
    let window_max = series
        .iter()
        .map(|p| p.high)
        .fold(f64::NEG_INFINITY, f64::max);

    let closes: Vec<f64> = series.iter().map(|p| p.close).collect();

    Ok(VolMetrics {
        current,
        window_min,
        window_max,
        iv_rank: rank::iv_rank(current, window_min, window_max),
        iv_percentile: percentile::iv_percentile(&closes, current),
    })
}

/// Reshapes the raw points into chart candles, converting epoch-millisecond
/// timestamps to calendar time.
pub fn to_candles(series: &[VolatilityPoint]) -> Vec<Candle> {
    series
        .iter()
        .map(|p| Candle {
            timestamp: datetime_from_ms(p.timestamp_ms),
            open: p.open,
            high: p.high,
            low: p.low,
            close: p.close,
        })
        .collect()
}
