//! Sitebook Search
//!
//! Command-palette lookup across the loaded rows.
//!
//! # Core Concepts
//!
//! - [`SearchQuery`]: Lowercased whitespace-separated terms
//! - [`SearchCorpus`]: Borrowed projects, tasks and quotes to search
//! - [`SearchResults`]: Hits grouped by kind, projects first
//!
//! Every term has to appear (case-insensitively) in at least one of the
//! searched fields of a row for the row to match.
//!
//! # Example
//!
//! ```rust,ignore
//! use sitebook_search::{search, SearchCorpus};
//!
//! let corpus = SearchCorpus::new(&projects, &tasks, &quotes);
//! let results = search("harbor tile", &corpus, 5);
//!
//! for hit in &results.tasks {
//!     println!("{} ({})", hit.description, hit.project_name);
//! }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod query;
mod results;

pub use query::SearchQuery;
pub use results::{search, ProjectHit, QuoteHit, SearchCorpus, SearchResults, TaskHit};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
