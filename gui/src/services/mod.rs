// GUI-side services
pub mod engine_client;
