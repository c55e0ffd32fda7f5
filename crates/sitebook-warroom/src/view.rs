//! Task view assembly
//!
//! Preferences travel with each call as a [`TaskViewConfig`]; nothing is
//! remembered between calls.

use crate::filter::{filter_tasks, TaskFilter};
use crate::sort::{sort_tasks, SortMode};
use crate::stats::{TaskBreakdown, TaskStats};
use crate::task_like::TaskLike;
use serde::{Deserialize, Serialize};

/// Filter and sort preferences for one task view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskViewConfig {
    /// Active filter
    #[serde(default)]
    pub filter: TaskFilter,
    /// Active sort mode
    #[serde(default)]
    pub sort: SortMode,
}

impl TaskViewConfig {
    /// Unfiltered, urgency-sorted view
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With filter
    #[inline]
    #[must_use]
    pub fn with_filter(mut self, filter: TaskFilter) -> Self {
        self.filter = filter;
        self
    }

    /// With sort mode
    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Computed task view borrowing from the fetched rows
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView<'a, T> {
    /// Filtered tasks in display order
    pub tasks: Vec<&'a T>,
    /// Global counts over all tasks
    pub stats: TaskStats,
    /// Stall and per-project counts over all tasks
    pub breakdown: TaskBreakdown,
}

/// Run filter → sort → stats over a fetched collection
#[must_use]
pub fn build_task_view<'a, T: TaskLike>(tasks: &'a [T], config: &TaskViewConfig) -> TaskView<'a, T> {
    let mut shown = filter_tasks(tasks, &config.filter);
    sort_tasks(&mut shown, config.sort);

    TaskView {
        tasks: shown,
        stats: TaskStats::from_tasks(tasks),
        breakdown: TaskBreakdown::from_tasks(tasks),
    }
}
