// Refresh pipeline: fetch the trailing-year DVOL series, compute metrics,
// reshape for the chart. Stateless per refresh; nothing is cached between
// calls.
use crate::config::settings::EngineSettings;
use crate::data::volatility_index;
use crate::error::EngineError;
use crate::metrics;
use chrono::Utc;
use shared::models::{Currency, DvolSnapshot};
use shared::utils::trailing_year_window;
use tracing::info;

pub struct DvolService {
    client: reqwest::Client,
    settings: EngineSettings,
    // Trailing-year window, fixed at service construction. Every refresh
    // reuses the same window; only the currency varies between calls.
    start_timestamp_ms: i64,
    end_timestamp_ms: i64,
}

impl DvolService {
    /// Builds the service and pins the trailing-365-day query window to the
    /// current time. Called once during process startup.
    pub fn new(settings: EngineSettings) -> Self {
        let (start_timestamp_ms, end_timestamp_ms) = trailing_year_window(Utc::now());
        DvolService {
            client: reqwest::Client::new(),
            settings,
            start_timestamp_ms,
            end_timestamp_ms,
        }
    }

    /// Query window as (start, end) epoch milliseconds.
    pub fn window(&self) -> (i64, i64) {
        (self.start_timestamp_ms, self.end_timestamp_ms)
    }

    /// Runs one full refresh cycle for `currency`: fetch, compute, reshape.
    /// Any failure aborts the cycle with no partial output.
    pub async fn refresh(&self, currency: Currency) -> Result<DvolSnapshot, EngineError> {
        info!(
            currency = %currency,
            start_timestamp_ms = self.start_timestamp_ms,
            end_timestamp_ms = self.end_timestamp_ms,
            resolution_secs = self.settings.resolution_secs,
            "Refreshing DVOL snapshot"
        );

        let series = volatility_index::fetch_volatility_index(
            &self.client,
            &self.settings.api_base_url,
            currency,
            self.start_timestamp_ms,
            self.end_timestamp_ms,
            self.settings.resolution_secs,
        )
        .await?;

        let vol_metrics = metrics::compute(&series)?;
        let candles = metrics::to_candles(&series);

        info!(
            currency = %currency,
            points = series.len(),
            iv_rank = vol_metrics.iv_rank,
            iv_percentile = vol_metrics.iv_percentile,
            "Refresh complete"
        );

        Ok(DvolSnapshot {
            currency,
            candles,
            metrics: vol_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::YEAR_MS;

    #[test]
    fn test_window_spans_one_year() {
        let service = DvolService::new(EngineSettings::default());
        let (start, end) = service.window();
        assert_eq!(end - start, YEAR_MS);
    }

    #[test]
    fn test_window_fixed_across_calls() {
        let service = DvolService::new(EngineSettings::default());
        assert_eq!(service.window(), service.window());
    }

    #[tokio::test]
    async fn test_refresh_propagates_transport_error() {
        // Port 1 on loopback is not listening; the fetch must fail and the
        // failure must surface instead of a partial snapshot.
        let settings = EngineSettings {
            api_base_url: "http://127.0.0.1:1".to_string(),
            ..EngineSettings::default()
        };
        let service = DvolService::new(settings);
        let result = service.refresh(Currency::Btc).await;
        assert!(matches!(result, Err(EngineError::HttpError { .. })));
    }
}
