// Fetches the DVOL series from the exchange's public REST endpoint.
use crate::error::EngineError;
use serde::Deserialize;
use shared::models::{Currency, VolatilityPoint};

const VOLATILITY_INDEX_PATH: &str = "/api/v2/public/get_volatility_index_data";

// Response shape: {"result": {"data": [[timestamp_ms, open, high, low, close], ...]}}
// The 5-element point arrays decode as tuples.
#[derive(Debug, Deserialize)]
struct VolatilityIndexResponse {
    result: VolatilityIndexResult,
}

#[derive(Debug, Deserialize)]
struct VolatilityIndexResult {
    data: Vec<(i64, f64, f64, f64, f64)>,
}

/// Query pairs for the volatility index request. Only `currency` varies
/// between refreshes of one process; the window and resolution are pinned
/// by the caller.
fn query_params(
    currency: Currency,
    start_timestamp_ms: i64,
    end_timestamp_ms: i64,
    resolution_secs: u32,
) -> [(&'static str, String); 4] {
    [
        ("currency", currency.as_str().to_string()),
        ("start_timestamp", start_timestamp_ms.to_string()),
        ("end_timestamp", end_timestamp_ms.to_string()),
        ("resolution", resolution_secs.to_string()),
    ]
}

/// Issues one GET request for the volatility index series and returns the
/// points in the order the exchange sent them (ascending in time).
///
/// Transport failures, non-2xx statuses and undecodable bodies all surface
/// as errors; there is no retry and no fallback data.
pub async fn fetch_volatility_index(
    client: &reqwest::Client,
    base_url: &str,
    currency: Currency,
    start_timestamp_ms: i64,
    end_timestamp_ms: i64,
    resolution_secs: u32,
) -> Result<Vec<VolatilityPoint>, EngineError> {
    let url = format!("{}{}", base_url, VOLATILITY_INDEX_PATH);
    let response = client
        .get(&url)
        .query(&query_params(
            currency,
            start_timestamp_ms,
            end_timestamp_ms,
            resolution_secs,
        ))
        .send()
        .await?
        .error_for_status()?;

    let body = response.text().await?;
    parse_response(&body)
}

/// Decodes a response body into volatility points. Split out from the
/// network call so the schema handling is testable on its own.
pub fn parse_response(body: &str) -> Result<Vec<VolatilityPoint>, EngineError> {
    let decoded: VolatilityIndexResponse = serde_json::from_str(body)
        .map_err(|e| EngineError::SchemaError(format!("volatility index response: {}", e)))?;

    Ok(decoded
        .result
        .data
        .into_iter()
        .map(|(timestamp_ms, open, high, low, close)| VolatilityPoint {
            timestamp_ms,
            open,
            high,
            low,
            close,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_valid_body() {
        let body = r#"{
            "jsonrpc": "2.0",
            "result": {
                "continuation": null,
                "data": [
                    [1672531200000, 55.1, 56.3, 54.0, 55.9],
                    [1672574400000, 55.9, 57.2, 55.5, 56.8]
                ]
            },
            "usIn": 1672600000000000,
            "usOut": 1672600000001000,
            "usDiff": 1000,
            "testnet": false
        }"#;
        let points = parse_response(body).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp_ms, 1_672_531_200_000);
        assert_eq!(points[0].open, 55.1);
        assert_eq!(points[0].high, 56.3);
        assert_eq!(points[0].low, 54.0);
        assert_eq!(points[0].close, 55.9);
        assert_eq!(points[1].close, 56.8);
    }

    #[test]
    fn test_parse_response_missing_result_field() {
        let body = r#"{"jsonrpc": "2.0", "error": {"code": 10028, "message": "too_many_requests"}}"#;
        let err = parse_response(body).unwrap_err();
        match err {
            EngineError::SchemaError(msg) => assert!(msg.contains("result")),
            other => panic!("Expected SchemaError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_response_malformed_point() {
        // A point with a missing field must not decode into a partial series.
        let body = r#"{"result": {"data": [[1672531200000, 55.1, 56.3, 54.0]]}}"#;
        assert!(matches!(
            parse_response(body),
            Err(EngineError::SchemaError(_))
        ));
    }

    #[test]
    fn test_parse_response_not_json() {
        assert!(matches!(
            parse_response("<html>502 Bad Gateway</html>"),
            Err(EngineError::SchemaError(_))
        ));
    }

    #[test]
    fn test_query_params_currency_switch_keeps_window() {
        // Switching the selector from BTC to ETH must change only the
        // instrument; window and resolution stay as pinned.
        let btc = query_params(Currency::Btc, 1_000, 2_000, 43_200);
        let eth = query_params(Currency::Eth, 1_000, 2_000, 43_200);
        assert_eq!(btc[0], ("currency", "BTC".to_string()));
        assert_eq!(eth[0], ("currency", "ETH".to_string()));
        assert_eq!(btc[1..], eth[1..]);
    }

    #[test]
    fn test_query_params_values() {
        let params = query_params(Currency::Btc, 1_640_995_200_000, 1_672_531_200_000, 43_200);
        assert_eq!(params[1], ("start_timestamp", "1640995200000".to_string()));
        assert_eq!(params[2], ("end_timestamp", "1672531200000".to_string()));
        assert_eq!(params[3], ("resolution", "43200".to_string()));
    }

    #[test]
    fn test_parse_response_empty_data() {
        // Zero points decode fine here; the metrics layer rejects them.
        let body = r#"{"result": {"data": []}}"#;
        let points = parse_response(body).unwrap();
        assert!(points.is_empty());
    }
}
