//! Static panel content for each record book tab.

use leptos::prelude::*;

use super::RecordTab;
use crate::sections::progress::{Metric, MetricList};

/// Content panel frame
#[component]
fn PanelFrame(tab: RecordTab, children: Children) -> impl IntoView {
    view! {
        <div class="record-panel" role="tabpanel" data-panel={tab.id()}>
            <h3 class="record-panel-title">
                <i class={tab.icon()}></i>
                {tab.label()}
            </h3>
            {children()}
        </div>
    }
}

/// Picks the single panel for `tab`.
pub fn render_panel(tab: RecordTab) -> AnyView {
    match tab {
        RecordTab::StudentDetails => view! { <StudentDetails /> }.into_any(),
        RecordTab::AcademicRecords => view! { <AcademicRecords /> }.into_any(),
        RecordTab::ParentsDetails => view! { <ParentsDetails /> }.into_any(),
        RecordTab::Objective => view! { <Objective /> }.into_any(),
        RecordTab::AcademicPerformance => view! { <AcademicPerformance /> }.into_any(),
    }
}

#[component]
fn Field(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="record-field">
            <dt class="record-field-label">{label}</dt>
            <dd class="record-field-value">{value}</dd>
        </div>
    }
}

#[component]
fn StudentDetails() -> impl IntoView {
    view! {
        <PanelFrame tab={RecordTab::StudentDetails}>
            <dl class="record-fields">
                <Field label="Name" value="Aarav Mehta" />
                <Field label="Enrollment No." value="MT-2025-0142" />
                <Field label="Class / Section" value="XI / B" />
                <Field label="Mentor" value="Dr. Kavya Rao" />
                <Field label="Email" value="aarav.mehta@school.edu" />
            </dl>
        </PanelFrame>
    }
}

const TERMS: &[(&str, &[(&str, &str)])] = &[
    (
        "Term 1",
        &[("Mathematics", "A"), ("Physics", "B+"), ("Chemistry", "A-"), ("English", "A")],
    ),
    (
        "Term 2",
        &[("Mathematics", "A+"), ("Physics", "A-"), ("Chemistry", "B+"), ("English", "A")],
    ),
];

#[component]
fn AcademicRecords() -> impl IntoView {
    view! {
        <PanelFrame tab={RecordTab::AcademicRecords}>
            {TERMS
                .iter()
                .map(|(term, grades)| {
                    view! {
                        <table class="record-table">
                            <caption>{*term}</caption>
                            <thead>
                                <tr>
                                    <th>"Subject"</th>
                                    <th>"Grade"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {grades
                                    .iter()
                                    .map(|(subject, grade)| {
                                        view! {
                                            <tr>
                                                <td>{*subject}</td>
                                                <td class="record-grade">{*grade}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })
                .collect_view()}
        </PanelFrame>
    }
}

#[component]
fn ParentsDetails() -> impl IntoView {
    view! {
        <PanelFrame tab={RecordTab::ParentsDetails}>
            <dl class="record-fields">
                <Field label="Father" value="Rohit Mehta" />
                <Field label="Mother" value="Sunita Mehta" />
                <Field label="Primary Contact" value="+91 98765 43210" />
                <Field label="Preferred Update" value="Monthly summary by email" />
            </dl>
        </PanelFrame>
    }
}

const GOALS: &[&str] = &[
    "Score above 90% in the Term 3 mathematics exam",
    "Finish one science olympiad mock paper every week",
    "Read two non-fiction books this semester",
    "Lead a peer study group before finals",
];

#[component]
fn Objective() -> impl IntoView {
    view! {
        <PanelFrame tab={RecordTab::Objective}>
            <ul class="record-goals">
                {GOALS
                    .iter()
                    .map(|goal| view! { <li class="record-goal">{*goal}</li> })
                    .collect_view()}
            </ul>
        </PanelFrame>
    }
}

const PERFORMANCE: &[Metric] = &[
    Metric::new("Mathematics", 92),
    Metric::new("Physics", 78),
    Metric::new("Chemistry", 81),
    Metric::new("English", 88),
];

#[component]
fn AcademicPerformance() -> impl IntoView {
    view! {
        <PanelFrame tab={RecordTab::AcademicPerformance}>
            <MetricList metrics=PERFORMANCE />
        </PanelFrame>
    }
}
