// Semicircular SVG gauge, 0-100, with ticks every 20 points and the
// current value printed under the needle.
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

/// Fraction of the dial sweep the value covers (0 = left end, 1 = right
/// end), clamped for display. None when the value is not drawable, which
/// happens for the NaN rank of a zero-width trailing window.
fn needle_fraction(value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value.clamp(0.0, 100.0) / 100.0)
    } else {
        None
    }
}

/// Point on the dial at `fraction` of the sweep. The dial runs from 180
/// degrees (left) to 0 degrees (right) in screen coordinates.
fn dial_point(cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    let angle = std::f64::consts::PI * (1.0 - fraction);
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}

/// SVG arc path along the dial from the left end to `fraction`.
fn dial_arc(cx: f64, cy: f64, radius: f64, fraction: f64) -> String {
    let (x0, y0) = dial_point(cx, cy, radius, 0.0);
    let (x1, y1) = dial_point(cx, cy, radius, fraction);
    format!(
        "M {:.2} {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2}",
        x0, y0, radius, radius, x1, y1
    )
}

struct Tick {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
    label_x: String,
    label_y: String,
    label: String,
}

#[component]
pub fn Gauge(label: String, value: f64, caption: String) -> Element {
    let config = use_context::<AppConfig>();
    let palette = ThemePalette::for_name(&config.app.theme);

    let size = config.gauge.size;
    let cx = size / 2.0;
    let cy = size * 0.55;
    let radius = size * 0.42;
    let height = cy + 50.0;

    let background_arc = dial_arc(cx, cy, radius, 1.0);
    let fraction = needle_fraction(value);

    let value_arc = fraction.map(|f| {
        let arc = dial_arc(cx, cy, radius, f);
        rsx! {
            path {
                d: "{arc}",
                fill: "none",
                stroke: "{config.gauge.color}",
                stroke_width: "14",
                stroke_linecap: "round",
            }
        }
    });

    let needle = fraction.map(|f| {
        let (nx, ny) = dial_point(cx, cy, radius - 18.0, f);
        let nx = format!("{:.2}", nx);
        let ny = format!("{:.2}", ny);
        rsx! {
            line {
                x1: "{cx}",
                y1: "{cy}",
                x2: "{nx}",
                y2: "{ny}",
                stroke: "{palette.foreground}",
                stroke_width: "3",
            }
        }
    });

    let ticks: Vec<Tick> = (0..=5)
        .map(|step| {
            let f = step as f64 / 5.0;
            let (x1, y1) = dial_point(cx, cy, radius + 8.0, f);
            let (x2, y2) = dial_point(cx, cy, radius + 14.0, f);
            let (lx, ly) = dial_point(cx, cy, radius + 26.0, f);
            Tick {
                x1: format!("{:.2}", x1),
                y1: format!("{:.2}", y1),
                x2: format!("{:.2}", x2),
                y2: format!("{:.2}", y2),
                label_x: format!("{:.2}", lx),
                label_y: format!("{:.2}", ly + 4.0),
                label: format!("{}", step * 20),
            }
        })
        .collect();

    let value_label = if value.is_finite() {
        format!("{:.1}", value)
    } else {
        "--".to_string()
    };
    let value_y = format!("{:.2}", cy + 34.0);

    rsx! {
        div {
            class: "gauge",
            svg {
                width: "{size}",
                height: "{height}",
                view_box: "0 0 {size} {height}",
                text {
                    x: "{cx}",
                    y: "26",
                    text_anchor: "middle",
                    fill: "{palette.foreground}",
                    font_size: "22px",
                    "{label}"
                }
                path {
                    d: "{background_arc}",
                    fill: "none",
                    stroke: "{palette.muted}",
                    stroke_width: "14",
                    stroke_linecap: "round",
                }
                {value_arc}
                for tick in ticks {
                    line {
                        x1: "{tick.x1}",
                        y1: "{tick.y1}",
                        x2: "{tick.x2}",
                        y2: "{tick.y2}",
                        stroke: "{palette.muted}",
                        stroke_width: "2",
                    }
                    text {
                        x: "{tick.label_x}",
                        y: "{tick.label_y}",
                        text_anchor: "middle",
                        fill: "{palette.foreground}",
                        font_size: "14px",
                        "{tick.label}"
                    }
                }
                {needle}
                circle {
                    cx: "{cx}",
                    cy: "{cy}",
                    r: "6",
                    fill: "{palette.foreground}",
                }
                text {
                    x: "{cx}",
                    y: "{value_y}",
                    text_anchor: "middle",
                    fill: "{config.gauge.color}",
                    font_size: "26px",
                    "{value_label}"
                }
            }
            p { class: "gauge-caption", "{caption}" }
        }
    }
}
