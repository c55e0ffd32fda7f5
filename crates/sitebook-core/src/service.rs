//! Dashboard service
//!
//! Fetches rows through a [`RowSource`] and runs the pure view pipelines:
//! 1. Join the independent reads under one timeout
//! 2. Scope, filter and sort
//! 3. Aggregate into serializable view models

use crate::config::DashboardConfig;
use crate::error::{DashboardError, FetchError};
use crate::source::RowSource;
use serde::Serialize;
use sitebook_budget::{build_budget_view, BudgetInputs, BudgetView};
use sitebook_model::{ProjectId, Task, UserId};
use sitebook_search::{search, SearchCorpus, SearchResults};
use sitebook_warroom::{build_task_view, TaskBreakdown, TaskStats, TaskViewConfig};
use std::future::Future;

/// Owned War Room view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskViewModel {
    /// Filtered tasks in display order
    pub tasks: Vec<Task>,
    /// Counts over every fetched task
    pub stats: TaskStats,
    /// Stall and per-project counts over every fetched task
    pub breakdown: TaskBreakdown,
}

/// Both dashboard panels from one load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardViews {
    /// War Room panel
    pub tasks: TaskViewModel,
    /// Budget panel
    pub budget: BudgetView,
}

/// Orchestrates fetches and derived views
pub struct DashboardService<S> {
    source: S,
    config: DashboardConfig,
}

impl<S: RowSource> DashboardService<S> {
    /// Create service over a row source
    pub fn new(source: S, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Underlying row source
    #[inline]
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn current_user(&self) -> Result<&UserId, DashboardError> {
        self.config
            .current_user_id
            .as_ref()
            .ok_or_else(|| DashboardError::Config("current_user_id is not set".to_string()))
    }

    /// Await a fetch under the configured timeout
    async fn timed<T>(
        &self,
        what: &'static str,
        fetch: impl Future<Output = Result<T, FetchError>>,
    ) -> Result<T, DashboardError> {
        let limit = self.config.fetch_timeout();
        match tokio::time::timeout(limit, fetch).await {
            Ok(Ok(rows)) => Ok(rows),
            Ok(Err(e)) => {
                tracing::error!("Fetching {} failed: {}", what, e);
                Err(e.into())
            }
            Err(_) => {
                tracing::error!("Fetching {} timed out after {}s", what, limit.as_secs());
                Err(DashboardError::Timeout {
                    duration_secs: limit.as_secs(),
                })
            }
        }
    }

    /// Fetch the current user's tasks
    ///
    /// # Errors
    /// [`DashboardError::Config`] without a current user, otherwise fetch
    /// errors and timeouts.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>, DashboardError> {
        let user_id = self.current_user()?;
        let tasks = self.timed("tasks", self.source.fetch_tasks(user_id)).await?;
        tracing::debug!("Fetched {} tasks for {}", tasks.len(), user_id);
        Ok(tasks)
    }

    /// War Room view with the configured preferences
    ///
    /// # Errors
    /// See [`Self::fetch_tasks`].
    pub async fn task_view(&self) -> Result<TaskViewModel, DashboardError> {
        self.task_view_with(&self.config.task_view).await
    }

    /// War Room view with explicit preferences
    ///
    /// # Errors
    /// See [`Self::fetch_tasks`].
    pub async fn task_view_with(
        &self,
        view: &TaskViewConfig,
    ) -> Result<TaskViewModel, DashboardError> {
        tracing::info!("Building task view (sort: {})", view.sort);
        let tasks = self.fetch_tasks().await?;
        let model = task_view_model(&tasks, view);
        tracing::info!(
            "Task view ready: {} of {} tasks shown",
            model.tasks.len(),
            model.stats.total
        );
        Ok(model)
    }

    /// Fetch the four budget collections concurrently
    ///
    /// # Errors
    /// The first fetch error, or a timeout covering the joint fetch.
    pub async fn load_budget_inputs(&self) -> Result<BudgetInputs, DashboardError> {
        let joint = async {
            futures::try_join!(
                self.source.fetch_projects(),
                self.source.fetch_budget_areas(),
                self.source.fetch_line_items(),
                self.source.fetch_quotes(),
            )
        };
        let (projects, areas, line_items, quotes) = self.timed("budget inputs", joint).await?;
        tracing::debug!(
            "Fetched {} projects, {} areas, {} line items, {} quotes",
            projects.len(),
            areas.len(),
            line_items.len(),
            quotes.len()
        );
        Ok(BudgetInputs::new(projects, areas, line_items, quotes))
    }

    /// Budget view, scoped to one project or the whole portfolio
    ///
    /// # Errors
    /// Fetch errors, timeouts, and [`DashboardError::Budget`] for non-finite
    /// amounts.
    pub async fn budget_view(
        &self,
        scope: Option<&ProjectId>,
    ) -> Result<BudgetView, DashboardError> {
        match scope {
            Some(project_id) => tracing::info!("Building budget view for {}", project_id),
            None => tracing::info!("Building portfolio budget view"),
        }
        let inputs = self.load_budget_inputs().await?;
        let view = build_budget_view(&inputs, scope)?;
        tracing::info!(
            "Budget view ready: {} areas, {} projects, {} trades",
            view.budget_by_area.len(),
            view.budget_by_project.len(),
            view.quotes_by_trade.len()
        );
        Ok(view)
    }

    /// Both panels with the configured preferences and scope
    ///
    /// # Errors
    /// The first failure from either panel.
    pub async fn dashboard(&self) -> Result<DashboardViews, DashboardError> {
        let (tasks, budget) = futures::try_join!(
            self.task_view(),
            self.budget_view(self.config.budget_scope.as_ref()),
        )?;
        Ok(DashboardViews { tasks, budget })
    }

    /// Palette search over projects, tasks and quotes
    ///
    /// # Errors
    /// Fetch errors and timeouts.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResults, DashboardError> {
        let user_id = self.current_user()?;
        let joint = async {
            futures::try_join!(
                self.source.fetch_projects(),
                self.source.fetch_tasks(user_id),
                self.source.fetch_quotes(),
            )
        };
        let (projects, tasks, quotes) = self.timed("search corpus", joint).await?;

        let results = search(query, &SearchCorpus::new(&projects, &tasks, &quotes), limit);
        tracing::info!("Search '{}' matched {} rows", query, results.len());
        Ok(results)
    }
}

/// Run the task pipeline and take ownership of the shown rows
#[must_use]
pub fn task_view_model(tasks: &[Task], view: &TaskViewConfig) -> TaskViewModel {
    let built = build_task_view(tasks, view);
    TaskViewModel {
        tasks: built.tasks.into_iter().cloned().collect(),
        stats: built.stats,
        breakdown: built.breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockRowSource;
    use pretty_assertions::assert_eq;
    use sitebook_test_utils::{sample_budget, sample_tasks};
    use sitebook_warroom::{SortMode, TaskFilter};

    fn budget_mock() -> MockRowSource {
        let budget = sample_budget();
        let mut source = MockRowSource::new();
        let projects = budget.projects.clone();
        source
            .expect_fetch_projects()
            .returning(move || Ok(projects.clone()));
        let areas = budget.areas.clone();
        source
            .expect_fetch_budget_areas()
            .returning(move || Ok(areas.clone()));
        let line_items = budget.line_items.clone();
        source
            .expect_fetch_line_items()
            .returning(move || Ok(line_items.clone()));
        let quotes = budget.quotes;
        source
            .expect_fetch_quotes()
            .returning(move || Ok(quotes.clone()));
        source
    }

    fn config() -> DashboardConfig {
        DashboardConfig::new().with_user("u-1")
    }

    #[tokio::test]
    async fn task_view_passes_user_and_preferences() {
        let mut source = MockRowSource::new();
        source
            .expect_fetch_tasks()
            .withf(|user| user.as_str() == "u-1")
            .times(1)
            .returning(|_| Ok(sample_tasks()));

        let service = DashboardService::new(source, config());
        let view = service
            .task_view_with(
                &TaskViewConfig::new()
                    .with_filter(TaskFilter::new().with_status("overdue"))
                    .with_sort(SortMode::Priority),
            )
            .await
            .unwrap();

        let ids: Vec<&str> = view.tasks.iter().map(|t| t.id.as_str()).collect();
        // t5 is blocking, so it leads despite the lower priority
        assert_eq!(ids, ["t5", "t3"]);
        assert_eq!(view.stats.total, 6);
        assert_eq!(view.stats.overdue, 2);
    }

    #[tokio::test]
    async fn missing_user_is_config_error() {
        let service = DashboardService::new(MockRowSource::new(), DashboardConfig::new());
        let err = service.task_view().await.unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let mut source = MockRowSource::new();
        source
            .expect_fetch_tasks()
            .returning(|_| Err(FetchError::Unauthorized));

        let service = DashboardService::new(source, config());
        let err = service.task_view().await.unwrap_err();
        assert!(matches!(err, DashboardError::Fetch(FetchError::Unauthorized)));
    }

    #[tokio::test]
    async fn budget_view_joins_all_four_reads() {
        let service = DashboardService::new(budget_mock(), config());
        let view = service.budget_view(None).await.unwrap();

        assert_eq!(view.budget_by_project.len(), 2);
        assert_eq!(view.summary.total_budgeted, 4000.0);
    }

    #[tokio::test]
    async fn budget_fetch_error_short_circuits() {
        let mut source = MockRowSource::new();
        source.expect_fetch_projects().returning(|| Ok(Vec::new()));
        source.expect_fetch_budget_areas().returning(|| {
            Err(FetchError::Backend {
                status: 502,
                message: "bad gateway".to_string(),
            })
        });
        source.expect_fetch_line_items().returning(|| Ok(Vec::new()));
        source.expect_fetch_quotes().returning(|| Ok(Vec::new()));

        let service = DashboardService::new(source, config());
        let err = service.budget_view(None).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn dashboard_uses_configured_scope() {
        let mut source = budget_mock();
        source.expect_fetch_tasks().returning(|_| Ok(sample_tasks()));

        let service = DashboardService::new(source, config().with_budget_scope("p2"));
        let views = service.dashboard().await.unwrap();

        assert_eq!(views.tasks.tasks.len(), 6);
        assert_eq!(views.budget.budget_by_project.len(), 1);
        assert_eq!(views.budget.budget_by_project[0].name, "Alder Court");
    }

    #[tokio::test]
    async fn search_over_fetched_rows() {
        let mut source = budget_mock();
        source.expect_fetch_tasks().returning(|_| Ok(sample_tasks()));

        let service = DashboardService::new(source, config());
        let results = service.search("alder", 10).await.unwrap();

        assert_eq!(results.projects.len(), 1);
        assert_eq!(results.tasks.len(), 3);
    }
}
