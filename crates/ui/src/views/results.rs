use dioxus::prelude::*;
use quiz_core::model::ResultId;

use crate::context::AppContext;
use crate::views::{Subject, ViewError, ViewState, view_state_from_resource};
use crate::vm::{ChartVm, ResultVm, map_result};

#[component]
pub fn ResultsView(result_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let results = ctx.results();

    let resource = use_resource(move || {
        let results = results.clone();
        async move {
            let report = results
                .report(ResultId::new(result_id))
                .await
                .map_err(|err| ViewError::from_request(&err))?;
            Ok::<_, ViewError>(report.as_ref().map(map_result))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page results-container",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", {err.message(Subject::Results)} }
                },
                ViewState::Ready(None) => rsx! {
                    p { "No results found" }
                },
                ViewState::Ready(Some(result)) => rsx! {
                    ResultDetails { result }
                },
            }
        }
    }
}

#[component]
fn ResultDetails(result: ResultVm) -> Element {
    rsx! {
        div { class: "score",
            h2 { "Quiz Results" }
            div { class: "score-value", "{result.score_label}" }
            p { "Completed on {result.completed_label}" }
        }

        if let Some(chart) = result.chart {
            div { class: "chart-section",
                h3 { "Time Spent per Question" }
                TimeChart { chart }
            }
        }

        div { class: "answers-section",
            h3 { "Your Answers" }
            for row in result.answers {
                div { class: "answer-item",
                    p {
                        strong { "{row.label}:" }
                        " {row.answer}"
                    }
                    p {
                        strong { "Time spent:" }
                        " {row.time_label} seconds"
                    }
                }
            }
        }
    }
}

#[component]
fn TimeChart(chart: ChartVm) -> Element {
    rsx! {
        svg {
            class: "time-chart",
            width: "{chart.width}",
            height: "{chart.height}",
            view_box: "0 0 {chart.width} {chart.height}",
            role: "img",
            line {
                class: "time-chart-axis",
                x1: "0",
                y1: "{chart.baseline_y}",
                x2: "{chart.width}",
                y2: "{chart.baseline_y}",
            }
            polyline { class: "time-chart-line", fill: "none", points: "{chart.points}" }
            for marker in chart.markers {
                g { key: "{marker.label}",
                    circle { class: "time-chart-point", cx: "{marker.x}", cy: "{marker.y}", r: "4" }
                    text {
                        class: "time-chart-value",
                        x: "{marker.x}",
                        y: "{marker.value_y}",
                        text_anchor: "middle",
                        "{marker.value_label}"
                    }
                    text {
                        class: "time-chart-label",
                        x: "{marker.x}",
                        y: "{chart.label_y}",
                        text_anchor: "middle",
                        "{marker.label}"
                    }
                }
            }
        }
    }
}
