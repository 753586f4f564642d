use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP request error: {source}")]
    HttpError {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected response schema: {0}")]
    SchemaError(String),

    #[error("Volatility series is empty")]
    EmptySeries,
}
