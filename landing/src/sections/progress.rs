use leptos::prelude::*;

/// Mock progress value shown as a labelled bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub percent: u8,
}

impl Metric {
    pub const fn new(label: &'static str, percent: u8) -> Self {
        Self { label, percent }
    }
}

/// Bars never overflow their track.
fn clamp_percent(percent: u8) -> u8 {
    percent.min(100)
}

#[component]
pub fn ProgressBar(label: &'static str, percent: u8) -> impl IntoView {
    let percent = clamp_percent(percent);
    let width = format!("width: {percent}%");

    view! {
        <div class="progress">
            <div class="progress-meta">
                <span class="progress-label">{label}</span>
                <span class="progress-value">{format!("{percent}%")}</span>
            </div>
            <div
                class="progress-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=percent.to_string()
            >
                <div class="progress-fill" style=width></div>
            </div>
        </div>
    }
}

/// Renders a list of metrics as stacked progress bars.
#[component]
pub fn MetricList(metrics: &'static [Metric]) -> impl IntoView {
    view! {
        <div class="progress-list">
            {metrics
                .iter()
                .map(|m| view! { <ProgressBar label=m.label percent=m.percent /> })
                .collect_view()}
        </div>
    }
}
