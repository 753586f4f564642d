use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies with a published DVOL index on the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "BTC")]
    Btc,
    #[serde(rename = "ETH")]
    Eth,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Btc, Currency::Eth];

    /// Ticker string as the exchange expects it in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Btc => "BTC",
            Currency::Eth => "ETH",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BTC" => Ok(Currency::Btc),
            "ETH" => Ok(Currency::Eth),
            other => Err(format!("Unknown currency: {}", other)),
        }
    }
}

/// One resolution bucket of the volatility index, exactly as the exchange
/// returns it: epoch-millisecond timestamp plus OHLC in vol points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolatilityPoint {
    pub timestamp_ms: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Chart-facing reshape of a [`VolatilityPoint`] with the timestamp
/// converted to a calendar representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Scalar statistics derived from one trailing-year series.
///
/// `iv_rank` is NaN when the trailing window has zero width
/// (`window_max == window_min`); it is never clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolMetrics {
    pub current: f64,
    pub window_min: f64,
    pub window_max: f64,
    pub iv_rank: f64,
    pub iv_percentile: f64,
}

/// Complete output of one refresh cycle, handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DvolSnapshot {
    pub currency: Currency,
    pub candles: Vec<Candle>,
    pub metrics: VolMetrics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(currency.as_str().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_currency_serde_as_ticker() {
        assert_eq!(serde_json::to_string(&Currency::Eth).unwrap(), "\"ETH\"");
        let parsed: Currency = serde_json::from_str("\"BTC\"").unwrap();
        assert_eq!(parsed, Currency::Btc);
    }

    #[test]
    fn test_currency_unknown_rejected() {
        assert!("DOGE".parse::<Currency>().is_err());
    }
}
