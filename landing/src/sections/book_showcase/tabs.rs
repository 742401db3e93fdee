//! Record book tabs and the selection state behind them.

use std::fmt;

use leptos::prelude::*;

/// One of the five panels of the mentee record book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordTab {
    #[default]
    StudentDetails,
    AcademicRecords,
    ParentsDetails,
    Objective,
    AcademicPerformance,
}

impl RecordTab {
    /// Navigation order.
    pub const ALL: [RecordTab; 5] = [
        RecordTab::StudentDetails,
        RecordTab::AcademicRecords,
        RecordTab::ParentsDetails,
        RecordTab::Objective,
        RecordTab::AcademicPerformance,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            RecordTab::StudentDetails => "student-details",
            RecordTab::AcademicRecords => "academic-records",
            RecordTab::ParentsDetails => "parents-details",
            RecordTab::Objective => "objective",
            RecordTab::AcademicPerformance => "academic-performance",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RecordTab::StudentDetails => "Student Details",
            RecordTab::AcademicRecords => "Academic Records",
            RecordTab::ParentsDetails => "Parents Details",
            RecordTab::Objective => "Objective",
            RecordTab::AcademicPerformance => "Academic Performance",
        }
    }

    /// Icon font class for the nav button.
    pub const fn icon(self) -> &'static str {
        match self {
            RecordTab::StudentDetails => "ri-user-3-line",
            RecordTab::AcademicRecords => "ri-book-open-line",
            RecordTab::ParentsDetails => "ri-parent-line",
            RecordTab::Objective => "ri-focus-3-line",
            RecordTab::AcademicPerformance => "ri-bar-chart-2-line",
        }
    }
}

impl fmt::Display for RecordTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Handle to the currently selected tab.
///
/// Wraps a signal so it is `Copy` and can be moved into every button's
/// click handler. Exactly one tab is active at any time.
#[derive(Debug, Clone, Copy)]
pub struct TabSelection(RwSignal<RecordTab>);

impl TabSelection {
    pub fn new() -> Self {
        Self(RwSignal::new(RecordTab::default()))
    }

    pub fn active(&self) -> RecordTab {
        self.0.get()
    }

    pub fn is_active(&self, tab: RecordTab) -> bool {
        self.0.get() == tab
    }

    /// Re-selecting the active tab does not notify subscribers.
    pub fn select(&self, tab: RecordTab) {
        if self.0.get_untracked() == tab {
            return;
        }
        log::debug!("record book: {} -> {}", self.0.get_untracked(), tab);
        self.0.set(tab);
    }
}

impl Default for TabSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn ids_are_unique_and_match_display() {
        let mut ids: Vec<_> = RecordTab::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RecordTab::ALL.len());
        for tab in RecordTab::ALL {
            assert_eq!(tab.to_string(), tab.id());
        }
    }

    #[test]
    fn selection_starts_on_student_details() {
        Owner::new().with(|| {
            let selection = TabSelection::new();
            assert_eq!(selection.active(), RecordTab::StudentDetails);
            assert!(selection.is_active(RecordTab::StudentDetails));
        });
    }

    #[test]
    fn select_switches_active_tab() {
        Owner::new().with(|| {
            let selection = TabSelection::new();
            for tab in RecordTab::ALL {
                selection.select(tab);
                assert_eq!(selection.active(), tab);
                let active: Vec<_> = RecordTab::ALL
                    .into_iter()
                    .filter(|t| selection.is_active(*t))
                    .collect();
                assert_eq!(active, vec![tab]);
            }
        });
    }

    #[test]
    fn reselecting_active_tab_does_not_notify() {
        Owner::new().with(|| {
            let selection = TabSelection::new();
            let runs = Arc::new(AtomicUsize::new(0));
            let active = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    selection.active()
                }
            });

            assert_eq!(active.get(), RecordTab::StudentDetails);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            selection.select(RecordTab::Objective);
            assert_eq!(active.get(), RecordTab::Objective);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            selection.select(RecordTab::Objective);
            assert_eq!(active.get(), RecordTab::Objective);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }
}
