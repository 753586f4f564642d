// Data acquisition module
pub mod volatility_index;
