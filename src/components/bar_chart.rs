//! Bar Chart Component
//!
//! Minimal SVG bar chart for dashboard breakdowns.

use leptos::prelude::*;

use crate::chart::{bar_layout, short_label, LABEL_BAND};

const CHART_WIDTH: f64 = 480.0;
const CHART_HEIGHT: f64 = 240.0;

#[component]
pub fn BarChart(
    #[prop(into)] title: String,
    /// (label, value) pairs in display order
    #[prop(into)] data: Signal<Vec<(String, f64)>>,
    /// Formats values for tooltips
    #[prop(optional)] format_value: Option<fn(f64) -> String>,
) -> impl IntoView {
    let fmt = format_value.unwrap_or(|v| format!("{}", v));
    let bars = Memo::new(move |_| bar_layout(&data.get(), CHART_WIDTH, CHART_HEIGHT));
    let label_y = CHART_HEIGHT - LABEL_BAND + 16.0;

    view! {
        <div class="chart-card">
            <h3 class="chart-title">{title}</h3>
            <Show
                when=move || !bars.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-state">"No data to chart."</p> }
            >
                <svg
                    class="bar-chart"
                    viewBox=format!("0 0 {} {}", CHART_WIDTH, CHART_HEIGHT)
                    preserveAspectRatio="xMidYMid meet"
                >
                    {move || bars.get().into_iter().map(|bar| {
                        let tooltip = format!("{}: {}", bar.label, fmt(bar.value));
                        let center = bar.x + bar.width / 2.0;
                        view! {
                            <g class="bar">
                                <rect
                                    x=bar.x.to_string()
                                    y=bar.y.to_string()
                                    width=bar.width.to_string()
                                    height=bar.height.to_string()
                                >
                                    <title>{tooltip}</title>
                                </rect>
                                <text
                                    x=center.to_string()
                                    y=label_y.to_string()
                                    text-anchor="middle"
                                    class="bar-label"
                                >
                                    {short_label(&bar.label, 12)}
                                </text>
                            </g>
                        }
                    }).collect_view()}
                </svg>
            </Show>
        </div>
    }
}
