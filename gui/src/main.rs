// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use engine::config::settings::EngineSettings;
use services::engine_client::EngineClient;

fn main() {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting DVOL dashboard (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded embedded UI configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load embedded UI configuration: {}. Exiting.", e);
            panic!("Failed to load embedded UI configuration: {}", e);
        }
    };

    let engine_settings = match EngineSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Invalid engine configuration: {}. Exiting.", e);
            panic!("Invalid engine configuration: {}", e);
        }
    };

    // The engine client is built once here; it pins the trailing-year query
    // window for the lifetime of the process.
    let engine_client = EngineClient::new(engine_settings);

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DVOL IV Rank")
            .with_inner_size(LogicalSize::new(1280.0, 960.0)),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(engine_client)
        .with_context(app_config)
        .launch(App);
}
