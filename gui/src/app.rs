#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::DvolSnapshot;
use shared::utils::datetime_from_ms;

use crate::components::chart::candlestick::CandlestickChart;
use crate::components::gauge::Gauge;
use crate::components::toolbar::Toolbar;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::services::engine_client::EngineClient;
use crate::state::app_state::AppState;

const IV_RANK_CAPTION: &str = "IV Rank shows where the current IV level sits \
    within the range of IV in the last year. IV as measured by DVOL.";
const IV_PERCENTILE_CAPTION: &str = "IV Percentile shows what percentage of \
    time (in the last year) IV has been lower than the current level. IV as \
    measured by DVOL.";

#[component]
pub fn App() -> Element {
    let state = use_context_provider(|| Signal::new(AppState::default()));
    let client = use_context::<EngineClient>();
    let config = use_context::<AppConfig>();
    let palette = ThemePalette::for_name(&config.app.theme);

    // Window pinned by the engine at startup; shown in the chart title.
    let window_label = {
        let (start_ms, end_ms) = client.window();
        format!(
            "{} to {}",
            datetime_from_ms(start_ms).format("%d %b %Y"),
            datetime_from_ms(end_ms).format("%d %b %Y")
        )
    };

    // One refresh pipeline instance per trigger: runs once at startup,
    // re-runs when the selected currency changes, restarts on the refresh
    // button. A restart drops the in-flight cycle, so triggers cannot race
    // each other into the displayed outputs.
    let mut snapshot = use_resource(move || {
        let client = client.clone();
        let currency = state.read().currency;
        async move { client.refresh(currency).await }
    });

    let body = match &*snapshot.read_unchecked() {
        Some(Ok(snap)) => rsx! {
            Dashboard { snapshot: snap.clone(), window_label: window_label.clone() }
        },
        Some(Err(e)) => {
            let message = format!("Refresh failed: {}", e);
            rsx! {
                div { class: "error-banner", "{message}" }
            }
        }
        None => rsx! {
            div { class: "loading", "Loading DVOL data..." }
        },
    };

    rsx! {
        style { {include_str!("../assets/style.css")} }
        div {
            class: "app",
            style: "background-color: {palette.background}; color: {palette.foreground};",
            Toolbar { on_refresh: move |_| snapshot.restart() }
            {body}
        }
    }
}

#[component]
fn Dashboard(snapshot: DvolSnapshot, window_label: String) -> Element {
    let current = format!("{:.2}", snapshot.metrics.current);
    let high = format!("{:.2}", snapshot.metrics.window_max);
    let low = format!("{:.2}", snapshot.metrics.window_min);
    let title = format!("{} DVOL, {}", snapshot.currency, window_label);

    rsx! {
        div {
            class: "stats",
            div {
                class: "stat",
                span { class: "stat-label", "Current DVOL" }
                span { class: "stat-value", "{current}" }
            }
            div {
                class: "stat",
                span { class: "stat-label", "Trailing high" }
                span { class: "stat-value", "{high}" }
            }
            div {
                class: "stat",
                span { class: "stat-label", "Trailing low" }
                span { class: "stat-value", "{low}" }
            }
        }
        div { class: "chart-title", "{title}" }
        CandlestickChart { candles: snapshot.candles.clone() }
        div {
            class: "gauges",
            Gauge {
                label: "IV Rank",
                value: snapshot.metrics.iv_rank,
                caption: IV_RANK_CAPTION.to_string(),
            }
            Gauge {
                label: "IV Percentile",
                value: snapshot.metrics.iv_percentile,
                caption: IV_PERCENTILE_CAPTION.to_string(),
            }
        }
    }
}
