//! Row source abstraction
//!
//! One read per entity type. Implementations own transport, auth and row
//! decoding; the service only joins and times the reads.

use crate::error::FetchError;
use async_trait::async_trait;
use sitebook_model::{BudgetArea, LineItem, Project, Quote, Task, UserId};

/// Backend that serves already-denormalized rows
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RowSource: Send + Sync {
    /// War Room rows visible to `user_id`
    async fn fetch_tasks(&self, user_id: &UserId) -> Result<Vec<Task>, FetchError>;

    /// All projects
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    /// All budget areas
    async fn fetch_budget_areas(&self) -> Result<Vec<BudgetArea>, FetchError>;

    /// All budget line items
    async fn fetch_line_items(&self) -> Result<Vec<LineItem>, FetchError>;

    /// All vendor quotes
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError>;
}
