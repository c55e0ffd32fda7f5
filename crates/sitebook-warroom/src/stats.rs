//! Task statistics
//!
//! Always computed over the full, unfiltered collection: the counts drive the
//! filter shortcuts, so they must not depend on what is currently shown.

use crate::task_like::TaskLike;
use indexmap::IndexMap;
use serde::Serialize;
use sitebook_model::{ProjectId, StallReason, TaskStatus};

/// Global War Room counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    /// All tasks
    pub total: usize,
    /// Tasks flagged overdue
    pub overdue: usize,
    /// Tasks with status `waiting_on_me`
    pub waiting_on_me: usize,
    /// Tasks flagged blocking
    pub blocking: usize,
}

impl TaskStats {
    /// Count in a single pass
    #[must_use]
    pub fn from_tasks<T: TaskLike>(tasks: &[T]) -> Self {
        let mut stats = Self {
            total: tasks.len(),
            ..Self::default()
        };
        for task in tasks {
            stats.overdue += usize::from(task.is_overdue());
            stats.waiting_on_me += usize::from(task.status() == TaskStatus::WaitingOnMe);
            stats.blocking += usize::from(task.is_blocking());
        }
        stats
    }
}

/// Counts per stall reason; unstalled tasks are not counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StallBreakdown {
    /// `missing_info`
    pub missing_info: usize,
    /// `avoiding_contact`
    pub avoiding_contact: usize,
    /// `unclear_next_step`
    pub unclear_next_step: usize,
}

impl StallBreakdown {
    /// Count for one reason
    #[must_use]
    pub fn count(&self, reason: StallReason) -> usize {
        match reason {
            StallReason::MissingInfo => self.missing_info,
            StallReason::AvoidingContact => self.avoiding_contact,
            StallReason::UnclearNextStep => self.unclear_next_step,
        }
    }

    /// Stalled tasks overall
    #[must_use]
    pub fn total(&self) -> usize {
        self.missing_info + self.avoiding_contact + self.unclear_next_step
    }

    fn record(&mut self, reason: StallReason) {
        match reason {
            StallReason::MissingInfo => self.missing_info += 1,
            StallReason::AvoidingContact => self.avoiding_contact += 1,
            StallReason::UnclearNextStep => self.unclear_next_step += 1,
        }
    }
}

/// Per-project task counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTaskCounts {
    /// Project
    pub project_id: ProjectId,
    /// Denormalized project name (first seen)
    pub project_name: String,
    /// All tasks of the project
    pub total: usize,
    /// Tasks not yet completed or dead
    pub open: usize,
    /// Blocking tasks
    pub blocking: usize,
    /// Overdue tasks
    pub overdue: usize,
}

/// Stall and per-project breakdowns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBreakdown {
    /// Counts per stall reason
    pub stall: StallBreakdown,
    /// Counts per project, in first-seen order
    pub projects: Vec<ProjectTaskCounts>,
}

impl TaskBreakdown {
    /// Compute both breakdowns in a single pass
    #[must_use]
    pub fn from_tasks<T: TaskLike>(tasks: &[T]) -> Self {
        let mut stall = StallBreakdown::default();
        let mut projects: IndexMap<&ProjectId, ProjectTaskCounts> = IndexMap::new();

        for task in tasks {
            if let Some(reason) = task.stall_reason() {
                stall.record(reason);
            }

            let counts = projects
                .entry(task.project_id())
                .or_insert_with(|| ProjectTaskCounts {
                    project_id: task.project_id().clone(),
                    project_name: task.project_name().to_string(),
                    total: 0,
                    open: 0,
                    blocking: 0,
                    overdue: 0,
                });
            counts.total += 1;
            counts.open += usize::from(!task.status().is_terminal());
            counts.blocking += usize::from(task.is_blocking());
            counts.overdue += usize::from(task.is_overdue());
        }

        Self {
            stall,
            projects: projects.into_values().collect(),
        }
    }
}
