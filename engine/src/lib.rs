// Engine library root
// Data fetching and metric computation for the DVOL dashboard.

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod services;

pub use error::EngineError;
