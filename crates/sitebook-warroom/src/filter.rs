//! Task filter stage
//!
//! Both selector fields are optional and combine with AND semantics. The
//! status token is either a literal task status or a derived pseudo-status.

use crate::task_like::TaskLike;
use serde::{Deserialize, Serialize};
use sitebook_model::{ProjectId, TaskStatus};

/// Status selector token
///
/// Pseudo-statuses map onto derived flags:
/// - `overdue` → `is_overdue`
/// - `blocking` → `is_blocking`
/// - `on_me` → `status == waiting_on_me`
///
/// Anything else is compared literally against the task's status token, so an
/// unsupported token simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    /// `overdue`
    Overdue,
    /// `blocking`
    Blocking,
    /// `on_me`
    OnMe,
    /// Any other token, matched against the status token
    Literal(String),
}

impl StatusFilter {
    /// Parse a selector token; never fails
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "overdue" => StatusFilter::Overdue,
            "blocking" => StatusFilter::Blocking,
            "on_me" => StatusFilter::OnMe,
            literal => StatusFilter::Literal(literal.to_string()),
        }
    }

    /// Selector for a literal status
    #[inline]
    #[must_use]
    pub fn status(status: TaskStatus) -> Self {
        StatusFilter::Literal(status.as_str().to_string())
    }

    /// Token form
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            StatusFilter::Overdue => "overdue",
            StatusFilter::Blocking => "blocking",
            StatusFilter::OnMe => "on_me",
            StatusFilter::Literal(token) => token,
        }
    }

    /// Check one task
    #[must_use]
    pub fn matches<T: TaskLike>(&self, task: &T) -> bool {
        match self {
            StatusFilter::Overdue => task.is_overdue(),
            StatusFilter::Blocking => task.is_blocking(),
            StatusFilter::OnMe => task.status() == TaskStatus::WaitingOnMe,
            StatusFilter::Literal(token) => task.status().as_str() == token.as_str(),
        }
    }
}

impl From<String> for StatusFilter {
    fn from(token: String) -> Self {
        StatusFilter::parse(&token)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::Literal(token) => token,
            derived => derived.as_str().to_string(),
        }
    }
}

/// Task filter selector
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    /// Restrict to one project
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    /// Restrict by status or pseudo-status
    #[serde(default)]
    pub status: Option<StatusFilter>,
}

impl TaskFilter {
    /// Create filter with no constraints
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With project constraint
    #[inline]
    #[must_use]
    pub fn for_project(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// With status token constraint
    #[inline]
    #[must_use]
    pub fn with_status(mut self, token: &str) -> Self {
        self.status = Some(StatusFilter::parse(token));
        self
    }

    /// Whether the filter imposes no constraint
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none() && self.status.is_none()
    }

    /// Check one task against both constraints
    #[must_use]
    pub fn matches<T: TaskLike>(&self, task: &T) -> bool {
        let project_ok = self
            .project_id
            .as_ref()
            .map_or(true, |id| task.project_id() == id);
        let status_ok = self.status.as_ref().map_or(true, |s| s.matches(task));
        project_ok && status_ok
    }
}

/// Select matching tasks, preserving input order
#[must_use]
pub fn filter_tasks<'a, T: TaskLike>(tasks: &'a [T], filter: &TaskFilter) -> Vec<&'a T> {
    tasks.iter().filter(|task| filter.matches(*task)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebook_model::{Priority, Task};

    fn task(id: &str, project: &str, status: TaskStatus) -> Task {
        Task::new(
            id,
            project,
            format!("Project {project}"),
            format!("Task {id}"),
            Priority::P2,
            status,
            "2024-01-01T00:00:00Z".parse().unwrap(),
        )
    }

    fn ids(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.id.to_string()).collect()
    }

    #[test]
    fn empty_filter_keeps_everything_in_order() {
        let tasks = vec![
            task("1", "a", TaskStatus::Open),
            task("2", "b", TaskStatus::Dead),
            task("3", "a", TaskStatus::FollowUp),
        ];
        let filter = TaskFilter::new();
        assert!(filter.is_empty());
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["1", "2", "3"]);
    }

    #[test]
    fn project_constraint() {
        let tasks = vec![
            task("1", "a", TaskStatus::Open),
            task("2", "b", TaskStatus::Open),
            task("3", "a", TaskStatus::Open),
        ];
        let filter = TaskFilter::new().for_project("a");
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), ["1", "3"]);
    }

    #[test]
    fn pseudo_statuses_map_to_flags() {
        let tasks = vec![
            task("1", "a", TaskStatus::Open).overdue(),
            task("2", "a", TaskStatus::Open).blocking("holds framing"),
            task("3", "a", TaskStatus::WaitingOnMe),
        ];

        let overdue = TaskFilter::new().with_status("overdue");
        let blocking = TaskFilter::new().with_status("blocking");
        let on_me = TaskFilter::new().with_status("on_me");

        assert_eq!(ids(&filter_tasks(&tasks, &overdue)), ["1"]);
        assert_eq!(ids(&filter_tasks(&tasks, &blocking)), ["2"]);
        assert_eq!(ids(&filter_tasks(&tasks, &on_me)), ["3"]);
    }

    #[test]
    fn literal_status_and_unknown_token() {
        let tasks = vec![
            task("1", "a", TaskStatus::WaitingOnClient),
            task("2", "a", TaskStatus::Open),
        ];

        let literal = TaskFilter::new().with_status("waiting_on_client");
        let unknown = TaskFilter::new().with_status("snoozed");

        assert_eq!(ids(&filter_tasks(&tasks, &literal)), ["1"]);
        assert!(filter_tasks(&tasks, &unknown).is_empty());
    }

    #[test]
    fn status_filter_serde_uses_tokens() {
        let filter: TaskFilter =
            serde_json::from_str(r#"{"project_id": "p1", "status": "on_me"}"#).unwrap();
        assert_eq!(filter.status, Some(StatusFilter::OnMe));
        assert_eq!(
            serde_json::to_value(StatusFilter::status(TaskStatus::FollowUp)).unwrap(),
            serde_json::json!("follow_up")
        );
    }
}
