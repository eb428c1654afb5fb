use chrono::{DateTime, NaiveDateTime};
use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, Line, Plot, PlotPoint, Points};

use crate::models::TIMESTAMP_FORMAT;

const CHART_HEIGHT: f32 = 180.0;
const AXIS_FORMAT: &str = "%m-%d %H:%M";

/// Line chart of `(timestamp, value)` points, already in ascending order.
/// `id` must be unique per chart on screen.
pub fn line_chart(ui: &mut Ui, id: &str, points: &[(NaiveDateTime, f64)], color: Color32) {
    let series = plot_points(points);
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_formatter(|mark: GridMark, _range| format_seconds(mark.value, AXIS_FORMAT))
        .label_formatter(|_name, point: &PlotPoint| {
            format!("{}: {:.1}", format_seconds(point.x, TIMESTAMP_FORMAT), point.y)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(series.clone()).color(color).width(2.0));
            plot_ui.points(Points::new(series).color(color).radius(3.5));
        });
}

/// Timestamps become seconds since the epoch on the x axis.
fn plot_points(points: &[(NaiveDateTime, f64)]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|(timestamp, value)| [timestamp.and_utc().timestamp() as f64, *value])
        .collect()
}

fn format_seconds(seconds: f64, format: &str) -> String {
    DateTime::from_timestamp(seconds.round() as i64, 0)
        .map(|dt| dt.naive_utc().format(format).to_string())
        .unwrap_or_default()
}
