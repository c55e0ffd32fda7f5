//! Sitebook Budget Rollups
//!
//! Pure rollup pipeline: scope → group → aggregate → summarize.
//!
//! # Core Concepts
//!
//! - [`BudgetInputs`]: The four fetched collections
//! - [`ScopedInputs`]: Collections restricted to one project (or all)
//! - [`AreaRollup`] / [`ProjectRollup`]: Budgeted vs. actual sums
//! - [`TradeRollup`]: Quote comparison against the trade allowance
//! - [`BudgetSummary`]: Dashboard scalars
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebook_budget::{build_budget_view, BudgetInputs};
//!
//! let inputs = BudgetInputs::new(projects, areas, line_items, quotes);
//! let view = build_budget_view(&inputs, Some(&project_id))?;
//!
//! println!("{}% of trades quoted", view.summary.percent_quoted);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
mod inputs;
mod rollup;
mod summary;
mod trade;
mod view;

pub use error::BudgetError;
pub use inputs::{BudgetInputs, ScopedInputs};
pub use rollup::{rollup_by_area, rollup_by_project, AreaRollup, ProjectRollup};
pub use summary::{percent_quoted, BudgetSummary};
pub use trade::{rollup_by_trade, TradeRollup};
pub use view::{build_budget_view, BudgetView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
