#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

/// UI toggles for the dashboard page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Level focused in the donut chart, by index.
    pub hovered_level: Option<usize>,
    /// Metric cards whose paper panel is open, by [`metric_key`].
    pub expanded_metrics: HashSet<String>,
}

impl DashboardState {
    pub fn hover(&mut self, level: usize) {
        self.hovered_level = Some(level);
    }

    pub fn clear_hover(&mut self) {
        self.hovered_level = None;
    }

    /// Open or close a metric card. Returns whether it is now open.
    pub fn toggle_metric(&mut self, key: &str) -> bool {
        if self.expanded_metrics.remove(key) {
            false
        } else {
            self.expanded_metrics.insert(key.to_owned());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded_metrics.contains(key)
    }
}

/// Stable key for a metric card; metric ids are only unique per level.
#[must_use]
pub fn metric_key(level_id: &str, metric_id: &str) -> String {
    format!("{level_id}/{metric_id}")
}
