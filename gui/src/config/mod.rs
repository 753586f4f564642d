// GUI configuration module
pub mod theme;

use serde::Deserialize;

// Mirrors the structure of assets/config/default.json.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub chart: ChartConfig,
    pub gauge: GaugeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub candle: CandleStyle,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CandleStyle {
    pub bullish_color: String,
    pub bearish_color: String,
    pub wick_width: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GaugeConfig {
    pub color: String,
    pub size: f64,
}

impl AppConfig {
    /// Loads the embedded default configuration. The JSON is compiled into
    /// the binary, so a failure here means the asset itself is broken.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.app.theme, "dark");
        assert!(config.chart.width > 0.0);
        assert!(config.chart.height > 0.0);
        assert!(config.gauge.size > 0.0);
        assert!(config.gauge.color.starts_with('#'));
    }
}
