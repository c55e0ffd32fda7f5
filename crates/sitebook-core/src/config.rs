//! Dashboard configuration
//!
//! Read from a TOML file; command line flags are applied on top with the
//! builder methods.
//!
//! ```toml
//! current_user_id = "u-17"
//! fetch_timeout_secs = 10
//! budget_scope = "p1"
//!
//! [task_view]
//! sort = "priority"
//!
//! [task_view.filter]
//! status = "overdue"
//! ```

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};
use sitebook_model::{ProjectId, UserId};
use sitebook_warroom::{SortMode, TaskFilter, TaskViewConfig};
use std::path::Path;
use std::time::Duration;

/// Default fetch timeout
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Signed-in user whose War Room is loaded
    pub current_user_id: Option<UserId>,
    /// Upper bound on one joint fetch
    pub fetch_timeout_secs: u64,
    /// Task filter and sort preferences
    pub task_view: TaskViewConfig,
    /// Project the budget view is restricted to
    pub budget_scope: Option<ProjectId>,
}

impl DashboardConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document
    ///
    /// # Errors
    /// [`DashboardError::ConfigParse`] for bad TOML, [`DashboardError::Config`]
    /// for a zero timeout.
    pub fn from_toml_str(input: &str) -> Result<Self, DashboardError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`DashboardError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check values that deserialize fine but cannot be used
    ///
    /// # Errors
    /// [`DashboardError::Config`] when the fetch timeout is zero.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.fetch_timeout_secs == 0 {
            return Err(DashboardError::Config(
                "fetch_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Fetch timeout as a duration
    #[inline]
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// With current user
    #[inline]
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<UserId>) -> Self {
        self.current_user_id = Some(user_id.into());
        self
    }

    /// With fetch timeout
    #[inline]
    #[must_use]
    pub fn with_fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    /// With task filter
    #[inline]
    #[must_use]
    pub fn with_task_filter(mut self, filter: TaskFilter) -> Self {
        self.task_view.filter = filter;
        self
    }

    /// With task sort mode
    #[inline]
    #[must_use]
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.task_view.sort = sort;
        self
    }

    /// With budget scope
    #[inline]
    #[must_use]
    pub fn with_budget_scope(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.budget_scope = Some(project_id.into());
        self
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            current_user_id: None,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            task_view: TaskViewConfig::default(),
            budget_scope: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitebook_warroom::StatusFilter;

    #[test]
    fn empty_document_is_default() {
        let config = DashboardConfig::from_toml_str("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
        assert_eq!(config.task_view.sort, SortMode::Urgency);
    }

    #[test]
    fn full_document() {
        let config = DashboardConfig::from_toml_str(
            r#"
            current_user_id = "u-17"
            fetch_timeout_secs = 10
            budget_scope = "p1"

            [task_view]
            sort = "alpha_az"

            [task_view.filter]
            project_id = "p2"
            status = "on_me"
            "#,
        )
        .unwrap();

        assert_eq!(config.current_user_id, Some(UserId::new("u-17")));
        assert_eq!(config.fetch_timeout_secs, 10);
        assert_eq!(config.budget_scope, Some(ProjectId::new("p1")));
        assert_eq!(config.task_view.sort, SortMode::AlphaAz);
        assert_eq!(config.task_view.filter.project_id, Some(ProjectId::new("p2")));
        assert_eq!(config.task_view.filter.status, Some(StatusFilter::OnMe));
    }

    #[test]
    fn unknown_sort_mode_is_parse_error() {
        let err = DashboardConfig::from_toml_str("[task_view]\nsort = \"fastest\"").unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse(_)));
    }

    #[test]
    fn zero_timeout_rejected() {
        let err = DashboardConfig::from_toml_str("fetch_timeout_secs = 0").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn builders_override() {
        let config = DashboardConfig::new()
            .with_user("u-1")
            .with_sort(SortMode::Status)
            .with_budget_scope("p9")
            .with_task_filter(TaskFilter::new().with_status("blocking"));

        assert_eq!(config.current_user_id.unwrap().as_str(), "u-1");
        assert_eq!(config.task_view.sort, SortMode::Status);
        assert_eq!(config.budget_scope.unwrap().as_str(), "p9");
        assert_eq!(config.task_view.filter.status, Some(StatusFilter::Blocking));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = DashboardConfig::load("/nonexistent/sitebook.toml").unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
    }
}
