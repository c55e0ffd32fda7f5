//! JSON snapshot files
//!
//! A snapshot holds one fetch of every collection:
//!
//! ```json
//! { "tasks": [], "projects": [], "budget_areas": [], "line_items": [], "quotes": [] }
//! ```
//!
//! Absent keys are read as empty collections. Present collections go through
//! strict row decoding.

use crate::error::{DashboardError, FetchError};
use crate::source::RowSource;
use async_trait::async_trait;
use serde_json::{Map, Value};
use sitebook_model::{
    decode_rows, BudgetArea, LineItem, ModelError, Project, Quote, Row, Task, UserId,
};
use std::path::Path;

/// Every row collection from one fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub projects: Vec<Project>,
    pub budget_areas: Vec<BudgetArea>,
    pub line_items: Vec<LineItem>,
    pub quotes: Vec<Quote>,
}

impl Snapshot {
    /// Decode a snapshot document
    ///
    /// # Errors
    /// [`ModelError::Json`] if the text is not a JSON object, otherwise the
    /// first row decoding error.
    pub fn from_json_str(input: &str) -> Result<Self, ModelError> {
        let mut doc: Map<String, Value> = serde_json::from_str(input)?;

        Ok(Self {
            tasks: take_rows(&mut doc, "tasks")?,
            projects: take_rows(&mut doc, "projects")?,
            budget_areas: take_rows(&mut doc, "budget_areas")?,
            line_items: take_rows(&mut doc, "line_items")?,
            quotes: take_rows(&mut doc, "quotes")?,
        })
    }

    /// Read and decode a snapshot file
    ///
    /// # Errors
    /// [`DashboardError::Io`] if unreadable, [`DashboardError::Fetch`] with a
    /// decode error if malformed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        Ok(Self::from_json_str(&text)?)
    }
}

fn take_rows<T: Row>(doc: &mut Map<String, Value>, key: &str) -> Result<Vec<T>, ModelError> {
    match doc.remove(key) {
        Some(value) => decode_rows(value),
        None => Ok(Vec::new()),
    }
}

/// In-memory row source over a [`Snapshot`]
///
/// Rows are served as stored; the user id is not used to narrow tasks.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Serve rows from a decoded snapshot
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Underlying snapshot
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }
}

#[async_trait]
impl RowSource for SnapshotSource {
    async fn fetch_tasks(&self, _user_id: &UserId) -> Result<Vec<Task>, FetchError> {
        Ok(self.snapshot.tasks.clone())
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        Ok(self.snapshot.projects.clone())
    }

    async fn fetch_budget_areas(&self) -> Result<Vec<BudgetArea>, FetchError> {
        Ok(self.snapshot.budget_areas.clone())
    }

    async fn fetch_line_items(&self) -> Result<Vec<LineItem>, FetchError> {
        Ok(self.snapshot.line_items.clone())
    }

    async fn fetch_quotes(&self) -> Result<Vec<Quote>, FetchError> {
        Ok(self.snapshot.quotes.clone())
    }
}
