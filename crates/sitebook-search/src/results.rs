//! Grouped search results

use crate::query::SearchQuery;
use serde::Serialize;
use sitebook_model::{Project, ProjectId, Quote, QuoteId, Task, TaskId, TaskStatus};

/// Rows the palette searches over
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCorpus<'a> {
    /// Projects, matched on name, client and address
    pub projects: &'a [Project],
    /// Tasks, matched on description and project name
    pub tasks: &'a [Task],
    /// Quotes, matched on trade name
    pub quotes: &'a [Quote],
}

impl<'a> SearchCorpus<'a> {
    /// Create corpus
    #[must_use]
    pub fn new(projects: &'a [Project], tasks: &'a [Task], quotes: &'a [Quote]) -> Self {
        Self {
            projects,
            tasks,
            quotes,
        }
    }
}

/// Matching project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectHit {
    /// Project
    pub id: ProjectId,
    /// Project name
    pub name: String,
    /// Client, when recorded
    pub client_name: Option<String>,
}

/// Matching task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHit {
    /// Task
    pub id: TaskId,
    /// Owning project
    pub project_id: ProjectId,
    /// Owning project name
    pub project_name: String,
    /// Task description
    pub description: String,
    /// Current status
    pub status: TaskStatus,
}

/// Matching quote
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteHit {
    /// Quote
    pub id: QuoteId,
    /// Owning project
    pub project_id: ProjectId,
    /// Trade name, or `"Other"`
    pub trade: String,
    /// Vendor, when recorded
    pub vendor_name: Option<String>,
    /// Quoted price as entered
    pub quoted_price: Option<f64>,
}

/// Hits grouped by kind; each group keeps corpus order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults {
    /// Project hits
    pub projects: Vec<ProjectHit>,
    /// Task hits
    pub tasks: Vec<TaskHit>,
    /// Quote hits
    pub quotes: Vec<QuoteHit>,
}

impl SearchResults {
    /// Total hits across all groups
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len() + self.tasks.len() + self.quotes.len()
    }

    /// No hits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Search the corpus, returning at most `limit` hits per kind
#[must_use]
pub fn search(query: &str, corpus: &SearchCorpus<'_>, limit: usize) -> SearchResults {
    let query = SearchQuery::parse(query);
    if query.is_blank() {
        return SearchResults::default();
    }

    let projects = corpus
        .projects
        .iter()
        .filter(|p| {
            query.matches(&[
                Some(p.name.as_str()),
                p.client_name.as_deref(),
                p.address.as_deref(),
            ])
        })
        .take(limit)
        .map(|p| ProjectHit {
            id: p.id.clone(),
            name: p.name.clone(),
            client_name: p.client_name.clone(),
        })
        .collect();

    let tasks = corpus
        .tasks
        .iter()
        .filter(|t| query.matches(&[Some(t.description.as_str()), Some(t.project_name.as_str())]))
        .take(limit)
        .map(|t| TaskHit {
            id: t.id.clone(),
            project_id: t.project_id.clone(),
            project_name: t.project_name.clone(),
            description: t.description.clone(),
            status: t.status,
        })
        .collect();

    let quotes = corpus
        .quotes
        .iter()
        .filter(|q| query.matches(&[Some(q.trade_key())]))
        .take(limit)
        .map(|q| QuoteHit {
            id: q.id.clone(),
            project_id: q.project_id.clone(),
            trade: q.trade_key().to_string(),
            vendor_name: q.vendor_name.clone(),
            quoted_price: q.quoted_price,
        })
        .collect();

    SearchResults {
        projects,
        tasks,
        quotes,
    }
}
