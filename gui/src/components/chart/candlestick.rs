// SVG candlestick chart of the trailing-year DVOL series.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::Candle;

use crate::config::theme::ThemePalette;
use crate::config::AppConfig;

const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 36.0;

/// Maps a vol value to a vertical pixel position: `y_max` at the top of the
/// plot area, `y_min` at the bottom.
fn y_position(value: f64, y_min: f64, y_max: f64, plot_height: f64) -> f64 {
    let range = if (y_max - y_min) > 0.0 { y_max - y_min } else { 1.0 };
    MARGIN_TOP + (y_max - value) / range * plot_height
}

struct CandleShape {
    wick_x: String,
    wick_y1: String,
    wick_y2: String,
    body_x: String,
    body_y: String,
    body_width: String,
    body_height: String,
    color: String,
}

struct AxisLabel {
    x: String,
    y: String,
    text: String,
}

#[component]
pub fn CandlestickChart(candles: Vec<Candle>) -> Element {
    let config = use_context::<AppConfig>();
    let palette = ThemePalette::for_name(&config.app.theme);

    if candles.is_empty() {
        return rsx! {
            div { class: "chart-empty", "No chart data" }
        };
    }

    let width = config.chart.width;
    let height = config.chart.height;
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;

    let min_low = candles.iter().map(|c| c.low).fold(f64::INFINITY, f64::min);
    let max_high = candles
        .iter()
        .map(|c| c.high)
        .fold(f64::NEG_INFINITY, f64::max);
    // Pad the vertical scale a little so extremes do not touch the frame.
    let pad = (max_high - min_low).max(1.0) * 0.03;
    let y_min = min_low - pad;
    let y_max = max_high + pad;

    let count = candles.len();
    let x_step = plot_width / count as f64;
    let body_width = (x_step * 0.6).max(1.0);

    let shapes: Vec<CandleShape> = candles
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            let x_center = MARGIN_LEFT + (i as f64 + 0.5) * x_step;
            let body_top = candle.open.max(candle.close);
            let body_bottom = candle.open.min(candle.close);
            let body_y = y_position(body_top, y_min, y_max, plot_height);
            let body_h =
                (y_position(body_bottom, y_min, y_max, plot_height) - body_y).max(1.0);
            let color = if candle.close >= candle.open {
                config.chart.candle.bullish_color.clone()
            } else {
                config.chart.candle.bearish_color.clone()
            };
            CandleShape {
                wick_x: format!("{:.2}", x_center),
                wick_y1: format!("{:.2}", y_position(candle.high, y_min, y_max, plot_height)),
                wick_y2: format!("{:.2}", y_position(candle.low, y_min, y_max, plot_height)),
                body_x: format!("{:.2}", x_center - body_width / 2.0),
                body_y: format!("{:.2}", body_y),
                body_width: format!("{:.2}", body_width),
                body_height: format!("{:.2}", body_h),
                color,
            }
        })
        .collect();

    let value_labels: Vec<AxisLabel> = (0..=4)
        .map(|step| {
            let value = y_min + (y_max - y_min) * step as f64 / 4.0;
            AxisLabel {
                x: format!("{:.2}", MARGIN_LEFT - 8.0),
                y: format!("{:.2}", y_position(value, y_min, y_max, plot_height) + 4.0),
                text: format!("{:.1}", value),
            }
        })
        .collect();

    // Roughly six date labels along the x axis.
    let label_step = (count / 6).max(1);
    let date_labels: Vec<AxisLabel> = candles
        .iter()
        .enumerate()
        .step_by(label_step)
        .map(|(i, candle)| AxisLabel {
            x: format!("{:.2}", MARGIN_LEFT + (i as f64 + 0.5) * x_step),
            y: format!("{:.2}", height - 12.0),
            text: candle.timestamp.format("%b %d").to_string(),
        })
        .collect();

    let plot_right = format!("{:.2}", width - MARGIN_RIGHT);

    rsx! {
        div {
            class: "chart",
            svg {
                width: "100%",
                view_box: "0 0 {width} {height}",
                preserve_aspect_ratio: "xMidYMid meet",
                rect {
                    x: "0",
                    y: "0",
                    width: "{width}",
                    height: "{height}",
                    fill: "{config.chart.background}",
                }
                for label in value_labels {
                    line {
                        x1: "{MARGIN_LEFT}",
                        y1: "{label.y}",
                        x2: "{plot_right}",
                        y2: "{label.y}",
                        stroke: "{palette.muted}",
                        stroke_width: "0.5",
                        stroke_dasharray: "4 4",
                    }
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "end",
                        fill: "{palette.muted}",
                        font_size: "12px",
                        "{label.text}"
                    }
                }
                for shape in shapes {
                    line {
                        x1: "{shape.wick_x}",
                        y1: "{shape.wick_y1}",
                        x2: "{shape.wick_x}",
                        y2: "{shape.wick_y2}",
                        stroke: "{shape.color}",
                        stroke_width: "{config.chart.candle.wick_width}",
                    }
                    rect {
                        x: "{shape.body_x}",
                        y: "{shape.body_y}",
                        width: "{shape.body_width}",
                        height: "{shape.body_height}",
                        fill: "{shape.color}",
                    }
                }
                for label in date_labels {
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "middle",
                        fill: "{palette.muted}",
                        font_size: "12px",
                        "{label.text}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_position_scales_linearly() {
        // 100-pixel plot over a 0..10 value range
        assert_eq!(y_position(10.0, 0.0, 10.0, 100.0), MARGIN_TOP);
        assert_eq!(y_position(0.0, 0.0, 10.0, 100.0), MARGIN_TOP + 100.0);
        assert_eq!(y_position(5.0, 0.0, 10.0, 100.0), MARGIN_TOP + 50.0);
    }

    #[test]
    fn test_y_position_zero_range_does_not_divide_by_zero() {
        let y = y_position(5.0, 5.0, 5.0, 100.0);
        assert!(y.is_finite());
    }
}
