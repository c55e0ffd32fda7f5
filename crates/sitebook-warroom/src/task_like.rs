//! Task shape consumed by the pipeline
//!
//! The pipeline never touches a concrete record type directly. Any backend
//! row that can answer these questions can be filtered, sorted and counted.

use chrono::{DateTime, NaiveDate, Utc};
use sitebook_model::{Priority, ProjectId, StallReason, Task, TaskStatus};

/// Minimal War Room item
///
/// # Contract
/// - `is_overdue` and `is_blocking` are upstream facts; implementations
///   return them as stored, never recomputed
/// - `priority` and `status` are members of their closed sets
pub trait TaskLike {
    /// Owning project
    fn project_id(&self) -> &ProjectId;

    /// Denormalized project name
    fn project_name(&self) -> &str;

    /// Free-text description
    fn description(&self) -> &str;

    /// Priority
    fn priority(&self) -> Priority;

    /// Lifecycle status
    fn status(&self) -> TaskStatus;

    /// Whether other work waits on this task
    fn is_blocking(&self) -> bool;

    /// Whether the task is past due
    fn is_overdue(&self) -> bool;

    /// Next scheduled action, if any
    fn next_action_date(&self) -> Option<NaiveDate>;

    /// Creation instant
    fn created_at(&self) -> DateTime<Utc>;

    /// Why the task stalled, if it has
    fn stall_reason(&self) -> Option<StallReason>;
}

impl TaskLike for Task {
    fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn priority(&self) -> Priority {
        self.priority
    }

    fn status(&self) -> TaskStatus {
        self.status
    }

    fn is_blocking(&self) -> bool {
        self.is_blocking
    }

    fn is_overdue(&self) -> bool {
        self.is_overdue
    }

    fn next_action_date(&self) -> Option<NaiveDate> {
        self.next_action_date
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn stall_reason(&self) -> Option<StallReason> {
        self.stall_reason
    }
}

impl<T: TaskLike + ?Sized> TaskLike for &T {
    fn project_id(&self) -> &ProjectId {
        (**self).project_id()
    }

    fn project_name(&self) -> &str {
        (**self).project_name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }

    fn priority(&self) -> Priority {
        (**self).priority()
    }

    fn status(&self) -> TaskStatus {
        (**self).status()
    }

    fn is_blocking(&self) -> bool {
        (**self).is_blocking()
    }

    fn is_overdue(&self) -> bool {
        (**self).is_overdue()
    }

    fn next_action_date(&self) -> Option<NaiveDate> {
        (**self).next_action_date()
    }

    fn created_at(&self) -> DateTime<Utc> {
        (**self).created_at()
    }

    fn stall_reason(&self) -> Option<StallReason> {
        (**self).stall_reason()
    }
}
