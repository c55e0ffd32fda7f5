//! Sitebook Core - Dashboard service
//!
//! The orchestration layer between a row backend and the pure view crates:
//! - Fetches rows through the [`RowSource`] trait
//! - Joins independent reads concurrently under one timeout
//! - Builds the War Room, budget and search views
//! - Loads configuration and JSON snapshots
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebook_core::prelude::*;
//!
//! # async fn example() -> Result<(), DashboardError> {
//! let config = DashboardConfig::load("sitebook.toml")?;
//! let source = SnapshotSource::new(Snapshot::from_path("snapshot.json")?);
//! let service = DashboardService::new(source, config);
//!
//! let views = service.dashboard().await?;
//! println!("{} tasks, {}% of trades quoted", views.tasks.stats.total, views.budget.summary.percent_quoted);
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod service;
pub mod snapshot;
pub mod source;

pub use config::{DashboardConfig, DEFAULT_FETCH_TIMEOUT_SECS};
pub use error::{DashboardError, FetchError};
pub use service::{task_view_model, DashboardService, DashboardViews, TaskViewModel};
pub use snapshot::{Snapshot, SnapshotSource};
pub use source::RowSource;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the dashboard service
    pub use crate::{
        DashboardConfig, DashboardError, DashboardService, DashboardViews, FetchError, RowSource,
        Snapshot, SnapshotSource, TaskViewModel,
    };
    pub use sitebook_budget::BudgetView;
    pub use sitebook_search::SearchResults;
    pub use sitebook_warroom::{SortMode, TaskFilter, TaskViewConfig};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
