//! Task sort stage
//!
//! Each [`SortMode`] dispatches to exactly one pure comparator. The blocking
//! partition (blocking tasks first) wraps every mode except the two
//! alphabetical ones. Sorting uses the stable `slice::sort_by`, so tasks with
//! equal keys keep their input order.

use crate::error::SortModeError;
use crate::task_like::TaskLike;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sitebook_model::text::locale_cmp;
use sitebook_model::TaskStatus;
use std::cmp::Ordering;
use std::str::FromStr;

/// Pure task comparator
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Rank for status tokens missing from the status table
pub const UNRANKED_STATUS: u8 = 99;

const STATUS_RANKS: [(&str, u8); 10] = [
    ("open", 1),
    ("waiting_on_me", 2),
    ("waiting_on_client", 3),
    ("waiting_on_vendor", 4),
    ("waiting_on_contractor", 5),
    ("waiting_on_design_team", 6),
    ("waiting_on_plh", 7),
    ("follow_up", 8),
    ("completed", 9),
    ("dead", 10),
];

/// Position of a status token in the status sort
#[must_use]
pub fn status_rank(token: &str) -> u8 {
    STATUS_RANKS
        .iter()
        .find(|(known, _)| *known == token)
        .map_or(UNRANKED_STATUS, |(_, rank)| *rank)
}

/// War Room sort mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Overdue, then waiting on me, then priority, then next action date
    #[default]
    Urgency,
    /// Priority rank only
    Priority,
    /// Project name, then priority
    Project,
    /// Newest first
    DateNewest,
    /// Oldest first
    DateOldest,
    /// Description A→Z (no blocking partition)
    AlphaAz,
    /// Description Z→A (no blocking partition)
    AlphaZa,
    /// Fixed status table order
    Status,
}

impl SortMode {
    /// Every mode, in menu order
    pub const ALL: [SortMode; 8] = [
        SortMode::Urgency,
        SortMode::Priority,
        SortMode::Project,
        SortMode::DateNewest,
        SortMode::DateOldest,
        SortMode::AlphaAz,
        SortMode::AlphaZa,
        SortMode::Status,
    ];

    /// Wire token
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Urgency => "urgency",
            SortMode::Priority => "priority",
            SortMode::Project => "project",
            SortMode::DateNewest => "date_newest",
            SortMode::DateOldest => "date_oldest",
            SortMode::AlphaAz => "alpha_az",
            SortMode::AlphaZa => "alpha_za",
            SortMode::Status => "status",
        }
    }

    /// Menu label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Urgency => "Urgency",
            SortMode::Priority => "Priority",
            SortMode::Project => "Project",
            SortMode::DateNewest => "Newest",
            SortMode::DateOldest => "Oldest",
            SortMode::AlphaAz => "A → Z",
            SortMode::AlphaZa => "Z → A",
            SortMode::Status => "Status",
        }
    }

    /// Whether blocking tasks are forced ahead of everything else
    #[inline]
    #[must_use]
    pub fn partitions_blocking(&self) -> bool {
        !matches!(self, SortMode::AlphaAz | SortMode::AlphaZa)
    }

    /// Mode-specific comparator, without the blocking partition
    #[must_use]
    pub fn comparator<T: TaskLike>(&self) -> Comparator<T> {
        match self {
            SortMode::Urgency => compare_urgency::<T>,
            SortMode::Priority => compare_priority::<T>,
            SortMode::Project => compare_project::<T>,
            SortMode::DateNewest => compare_date_newest::<T>,
            SortMode::DateOldest => compare_date_oldest::<T>,
            SortMode::AlphaAz => compare_alpha_az::<T>,
            SortMode::AlphaZa => compare_alpha_za::<T>,
            SortMode::Status => compare_status::<T>,
        }
    }

    /// Full ordering for this mode
    #[must_use]
    pub fn compare<T: TaskLike>(&self, a: &T, b: &T) -> Ordering {
        let by_mode = self.comparator::<T>();
        if self.partitions_blocking() {
            blocking_first(a, b).then_with(|| by_mode(a, b))
        } else {
            by_mode(a, b)
        }
    }
}

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| SortModeError::Unknown(s.to_string()))
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort tasks in place (stable)
pub fn sort_tasks<T: TaskLike>(tasks: &mut [T], mode: SortMode) {
    tasks.sort_by(|a, b| mode.compare(a, b));
}

/// Blocking tasks before non-blocking ones
#[inline]
pub fn blocking_first<T: TaskLike>(a: &T, b: &T) -> Ordering {
    b.is_blocking().cmp(&a.is_blocking())
}

fn is_on_me<T: TaskLike>(task: &T) -> bool {
    task.status() == TaskStatus::WaitingOnMe
}

fn priority_rank_cmp<T: TaskLike>(a: &T, b: &T) -> Ordering {
    a.priority().rank().cmp(&b.priority().rank())
}

// Dated actions first, earliest first; undated last
fn next_action_cmp(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Overdue, waiting on me, priority, next action date
pub fn compare_urgency<T: TaskLike>(a: &T, b: &T) -> Ordering {
    b.is_overdue()
        .cmp(&a.is_overdue())
        .then_with(|| is_on_me(b).cmp(&is_on_me(a)))
        .then_with(|| priority_rank_cmp(a, b))
        .then_with(|| next_action_cmp(a.next_action_date(), b.next_action_date()))
}

/// Priority rank only
pub fn compare_priority<T: TaskLike>(a: &T, b: &T) -> Ordering {
    priority_rank_cmp(a, b)
}

/// Project name, then priority rank
pub fn compare_project<T: TaskLike>(a: &T, b: &T) -> Ordering {
    locale_cmp(a.project_name(), b.project_name()).then_with(|| priority_rank_cmp(a, b))
}

/// Newest `created_at` first
pub fn compare_date_newest<T: TaskLike>(a: &T, b: &T) -> Ordering {
    b.created_at().cmp(&a.created_at())
}

/// Oldest `created_at` first
pub fn compare_date_oldest<T: TaskLike>(a: &T, b: &T) -> Ordering {
    a.created_at().cmp(&b.created_at())
}

/// Description ascending
pub fn compare_alpha_az<T: TaskLike>(a: &T, b: &T) -> Ordering {
    locale_cmp(a.description(), b.description())
}

/// Description descending
pub fn compare_alpha_za<T: TaskLike>(a: &T, b: &T) -> Ordering {
    locale_cmp(b.description(), a.description())
}

/// Status table order
pub fn compare_status<T: TaskLike>(a: &T, b: &T) -> Ordering {
    status_rank(a.status().as_str()).cmp(&status_rank(b.status().as_str()))
}
