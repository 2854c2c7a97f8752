//! Usage Chart Module
//! Renders the daily-interactions demo series using egui_plot.

use egui::Color32;
use egui_plot::{Legend, Line, Plot, PlotPoints};

/// Series color (teal, matching the original dashboard styling).
const SERIES_COLOR: Color32 = Color32::from_rgb(75, 192, 192);

/// One labeled sample in the usage series.
#[derive(Debug, Clone, PartialEq)]
pub struct UsagePoint {
    pub label: &'static str,
    pub value: f64,
}

/// Static line chart of daily bot interactions.
///
/// The series is a fixed five-point demo sample; there is no live telemetry
/// behind it.
pub struct UsageChart {
    points: Vec<UsagePoint>,
}

impl Default for UsageChart {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageChart {
    pub fn new() -> Self {
        Self {
            points: Self::sample_series(),
        }
    }

    /// The hard-coded demo series: one value per weekday.
    pub fn sample_series() -> Vec<UsagePoint> {
        [
            ("Mon", 12.0),
            ("Tue", 19.0),
            ("Wed", 3.0),
            ("Thu", 5.0),
            ("Fri", 2.0),
        ]
        .into_iter()
        .map(|(label, value)| UsagePoint { label, value })
        .collect()
    }

    pub fn points(&self) -> &[UsagePoint] {
        &self.points
    }

    /// Draw the chart filling the available space.
    pub fn show(&self, ui: &mut egui::Ui) {
        let labels: Vec<&'static str> = self.points.iter().map(|p| p.label).collect();
        let line_points: PlotPoints = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value])
            .collect();

        Plot::new("usage_chart")
            .legend(Legend::default())
            .allow_scroll(false)
            .include_y(0.0)
            .x_axis_label("Day")
            .y_axis_label("Interactions")
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if (mark.value - idx as f64).abs() < 1e-6 && idx < labels.len() {
                    labels[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(line_points)
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .fill(0.0)
                        .name("Daily Interactions"),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_series_has_five_weekday_points() {
        let chart = UsageChart::new();
        let labels: Vec<&str> = chart.points().iter().map(|p| p.label).collect();
        let values: Vec<f64> = chart.points().iter().map(|p| p.value).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri"]);
        assert_eq!(values, [12.0, 19.0, 3.0, 5.0, 2.0]);
    }
}
