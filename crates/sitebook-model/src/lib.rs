//! Sitebook Row Model
//!
//! Flat, already-denormalized rows as they arrive from the backend.
//!
//! # Core Concepts
//!
//! - [`Task`]: War Room item with trusted derived flags (`is_overdue`, `is_blocking`)
//! - [`Project`], [`BudgetArea`], [`LineItem`]: budget hierarchy
//! - [`Quote`]: vendor quote grouped by trade
//! - [`Row`]: Trait tying a record to its entity name for strict decoding
//!
//! Rows are read-only snapshots. Nothing in this crate recomputes upstream
//! facts; it only checks that rows have the shape the engine relies on.
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebook_model::{decode_rows_str, Task};
//!
//! let tasks: Vec<Task> = decode_rows_str(json)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod budget;
mod error;
mod ids;
mod project;
mod quote;
mod row;
mod task;
pub mod text;

pub use budget::{BudgetArea, LineItem};
pub use error::ModelError;
pub use ids::{AreaId, LineItemId, ProjectId, QuoteId, TaskId, TradeCategoryId, UserId};
pub use project::{Project, ProjectStatus};
pub use quote::{Quote, QuoteStatus, OTHER_TRADE};
pub use row::{decode_rows, decode_rows_str, Row};
pub use task::{Priority, StallReason, Task, TaskStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
