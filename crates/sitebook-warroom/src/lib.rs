//! Sitebook War Room
//!
//! Pure task view pipeline: filter → sort → statistics.
//!
//! # Core Concepts
//!
//! - [`TaskLike`]: Minimal task shape the pipeline depends on
//! - [`TaskFilter`]: Project and status constraints (AND semantics)
//! - [`SortMode`]: Eight sort modes, one comparator each
//! - [`TaskStats`]: Global counts over the unfiltered collection
//! - [`TaskViewConfig`]: Per-call filter and sort preferences
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebook_warroom::{build_task_view, SortMode, TaskViewConfig};
//!
//! let config = TaskViewConfig::new().with_sort(SortMode::Priority);
//! let view = build_task_view(&tasks, &config);
//!
//! println!("{} of {} tasks shown", view.tasks.len(), view.stats.total);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod filter;
mod sort;
mod stats;
mod task_like;
mod view;

pub use error::SortModeError;
pub use filter::{filter_tasks, StatusFilter, TaskFilter};
pub use sort::{
    blocking_first, compare_alpha_az, compare_alpha_za, compare_date_newest,
    compare_date_oldest, compare_priority, compare_project, compare_status, compare_urgency,
    sort_tasks, status_rank, Comparator, SortMode, UNRANKED_STATUS,
};
pub use stats::{ProjectTaskCounts, StallBreakdown, TaskBreakdown, TaskStats};
pub use task_like::TaskLike;
pub use view::{build_task_view, TaskView, TaskViewConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
