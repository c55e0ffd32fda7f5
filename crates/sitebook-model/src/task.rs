//! War Room task rows
//!
//! Defines the task record and its closed enumerations:
//! - Priority (`P1`..`P3`)
//! - Task status (ten lifecycle tokens)
//! - Stall reason

use crate::error::ModelError;
use crate::ids::{ProjectId, TaskId};
use crate::row::Row;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    P1,
    P2,
    P3,
}

impl Priority {
    /// All priorities, most urgent first
    pub const ALL: [Priority; 3] = [Priority::P1, Priority::P2, Priority::P3];

    /// Sort rank (P1 = 0 is most urgent)
    #[inline]
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Priority::P1 => 0,
            Priority::P2 => 1,
            Priority::P3 => 2,
        }
    }

    /// Wire token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::P1 => "P1",
            Priority::P2 => "P2",
            Priority::P3 => "P3",
        }
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ModelError::unknown_token("priority", s))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    WaitingOnMe,
    WaitingOnClient,
    WaitingOnVendor,
    WaitingOnContractor,
    WaitingOnDesignTeam,
    WaitingOnPlh,
    FollowUp,
    Completed,
    Dead,
}

impl TaskStatus {
    /// Every status in lifecycle order
    pub const ALL: [TaskStatus; 10] = [
        TaskStatus::Open,
        TaskStatus::WaitingOnMe,
        TaskStatus::WaitingOnClient,
        TaskStatus::WaitingOnVendor,
        TaskStatus::WaitingOnContractor,
        TaskStatus::WaitingOnDesignTeam,
        TaskStatus::WaitingOnPlh,
        TaskStatus::FollowUp,
        TaskStatus::Completed,
        TaskStatus::Dead,
    ];

    /// Wire token (case-sensitive)
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::WaitingOnMe => "waiting_on_me",
            TaskStatus::WaitingOnClient => "waiting_on_client",
            TaskStatus::WaitingOnVendor => "waiting_on_vendor",
            TaskStatus::WaitingOnContractor => "waiting_on_contractor",
            TaskStatus::WaitingOnDesignTeam => "waiting_on_design_team",
            TaskStatus::WaitingOnPlh => "waiting_on_plh",
            TaskStatus::FollowUp => "follow_up",
            TaskStatus::Completed => "completed",
            TaskStatus::Dead => "dead",
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::WaitingOnMe => "Waiting on Me",
            TaskStatus::WaitingOnClient => "Waiting on Client",
            TaskStatus::WaitingOnVendor => "Waiting on Vendor",
            TaskStatus::WaitingOnContractor => "Waiting on Contractor",
            TaskStatus::WaitingOnDesignTeam => "Waiting on Design Team",
            TaskStatus::WaitingOnPlh => "Waiting on PLH",
            TaskStatus::FollowUp => "Follow Up",
            TaskStatus::Completed => "Completed",
            TaskStatus::Dead => "Dead",
        }
    }

    /// Completed and dead items need no further action
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Completed | TaskStatus::Dead)
    }
}

impl FromStr for TaskStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::unknown_token("task status", s))
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a task has stopped moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StallReason {
    MissingInfo,
    AvoidingContact,
    UnclearNextStep,
}

impl StallReason {
    /// Every stall reason
    pub const ALL: [StallReason; 3] = [
        StallReason::MissingInfo,
        StallReason::AvoidingContact,
        StallReason::UnclearNextStep,
    ];

    /// Wire token
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StallReason::MissingInfo => "missing_info",
            StallReason::AvoidingContact => "avoiding_contact",
            StallReason::UnclearNextStep => "unclear_next_step",
        }
    }
}

impl FromStr for StallReason {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StallReason::ALL
            .into_iter()
            .find(|reason| reason.as_str() == s)
            .ok_or_else(|| ModelError::unknown_token("stall reason", s))
    }
}

/// The backend writes the literal `none` instead of null for unstalled tasks
fn deserialize_stall_reason<'de, D>(deserializer: D) -> Result<Option<StallReason>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("" | "none") => Ok(None),
        Some(token) => token.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// War Room item
///
/// Materialized fresh on every fetch. `is_overdue` and `is_blocking` are
/// computed upstream and trusted as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub project_id: ProjectId,
    /// Denormalized project name
    pub project_name: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub is_blocking: bool,
    #[serde(default)]
    pub blocking_impact: Option<String>,
    /// Task this one is blocked by
    #[serde(default)]
    pub blocked_by_id: Option<TaskId>,
    #[serde(default)]
    pub blocked_by_name: Option<String>,
    pub is_overdue: bool,
    #[serde(default)]
    pub next_action_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub days_since_contact: Option<u32>,
    /// Point of contact
    #[serde(default)]
    pub poc_name: Option<String>,
    #[serde(default)]
    pub poc_type: Option<String>,
    #[serde(default)]
    pub latest_update: Option<String>,
    #[serde(default, deserialize_with = "deserialize_stall_reason")]
    pub stall_reason: Option<StallReason>,
}

impl Task {
    /// Create task with required fields; flags default to false
    #[must_use]
    pub fn new(
        id: impl Into<TaskId>,
        project_id: impl Into<ProjectId>,
        project_name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        status: TaskStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            project_name: project_name.into(),
            description: description.into(),
            priority,
            status,
            is_blocking: false,
            blocking_impact: None,
            blocked_by_id: None,
            blocked_by_name: None,
            is_overdue: false,
            next_action_date: None,
            created_at,
            days_since_contact: None,
            poc_name: None,
            poc_type: None,
            latest_update: None,
            stall_reason: None,
        }
    }

    /// Mark as blocking other work
    #[inline]
    #[must_use]
    pub fn blocking(mut self, impact: impl Into<String>) -> Self {
        self.is_blocking = true;
        self.blocking_impact = Some(impact.into());
        self
    }

    /// Mark as overdue
    #[inline]
    #[must_use]
    pub fn overdue(mut self) -> Self {
        self.is_overdue = true;
        self
    }

    /// With next action date
    #[inline]
    #[must_use]
    pub fn with_next_action(mut self, date: NaiveDate) -> Self {
        self.next_action_date = Some(date);
        self
    }

    /// With blocking task reference
    #[inline]
    #[must_use]
    pub fn blocked_by(mut self, id: impl Into<TaskId>, name: impl Into<String>) -> Self {
        self.blocked_by_id = Some(id.into());
        self.blocked_by_name = Some(name.into());
        self
    }

    /// With stall reason
    #[inline]
    #[must_use]
    pub fn with_stall_reason(mut self, reason: StallReason) -> Self {
        self.stall_reason = Some(reason);
        self
    }

    /// With point of contact
    #[inline]
    #[must_use]
    pub fn with_contact(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        days_since_contact: Option<u32>,
    ) -> Self {
        self.poc_name = Some(name.into());
        self.poc_type = Some(kind.into());
        self.days_since_contact = days_since_contact;
        self
    }

    /// With latest update text
    #[inline]
    #[must_use]
    pub fn with_update(mut self, update: impl Into<String>) -> Self {
        self.latest_update = Some(update.into());
        self
    }
}

impl Row for Task {
    const ENTITY: &'static str = "task";
}
