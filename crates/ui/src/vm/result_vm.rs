use quiz_core::report::{AnswerRow, ResultReport};

use crate::vm::time_fmt::format_local_datetime;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 240.0;
const CHART_PADDING: f64 = 32.0;

/// A labelled vertex of the time-per-question line.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartMarkerVm {
    pub x: f64,
    pub y: f64,
    /// Baseline of the value caption drawn above the point.
    pub value_y: f64,
    pub label: String,
    pub value_label: String,
}

/// Inline SVG geometry for the time-per-question chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartVm {
    pub width: f64,
    pub height: f64,
    pub baseline_y: f64,
    pub label_y: f64,
    /// `points` attribute of the polyline.
    pub points: String,
    pub markers: Vec<ChartMarkerVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub score_label: String,
    pub completed_label: String,
    pub chart: Option<ChartVm>,
    pub answers: Vec<AnswerRow>,
}

#[must_use]
pub fn map_result(report: &ResultReport) -> ResultVm {
    let completed_label = report
        .completed_at
        .map_or_else(|| report.completed_at_raw.clone(), format_local_datetime);

    ResultVm {
        score_label: report.score_label.clone(),
        completed_label,
        chart: report.has_chart().then(|| chart_geometry(report)),
        answers: report.answers.clone(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn chart_geometry(report: &ResultReport) -> ChartVm {
    let plot_width = CHART_WIDTH - 2.0 * CHART_PADDING;
    let plot_height = CHART_HEIGHT - 2.0 * CHART_PADDING;
    let baseline_y = CHART_HEIGHT - CHART_PADDING;
    let max = report.max_seconds();
    let count = report.chart.len();

    let markers: Vec<ChartMarkerVm> = report
        .chart
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let x = if count > 1 {
                CHART_PADDING + plot_width * idx as f64 / (count - 1) as f64
            } else {
                CHART_WIDTH / 2.0
            };
            let y = if max > 0.0 {
                baseline_y - plot_height * point.seconds / max
            } else {
                baseline_y
            };
            ChartMarkerVm {
                x,
                y,
                value_y: y - 8.0,
                label: point.label.clone(),
                value_label: format!("{:.1}s", point.seconds),
            }
        })
        .collect();

    let points = markers
        .iter()
        .map(|marker| format!("{:.1},{:.1}", marker.x, marker.y))
        .collect::<Vec<_>>()
        .join(" ");

    ChartVm {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        baseline_y,
        label_y: CHART_HEIGHT - 8.0,
        points,
        markers,
    }
}
