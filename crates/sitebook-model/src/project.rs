//! Project rows

use crate::ids::ProjectId;
use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Project lifecycle status
///
/// Only `active` and `on_hold` carry meaning for the dashboard; any other
/// token is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Other(String),
}

impl ProjectStatus {
    /// Wire token
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Other(token) => token,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(token: String) -> Self {
        match token.as_str() {
            "active" => ProjectStatus::Active,
            "on_hold" => ProjectStatus::OnHold,
            _ => ProjectStatus::Other(token),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

/// Construction project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub total_budget: Option<f64>,
    pub status: ProjectStatus,
}

impl Project {
    /// Create active project
    #[must_use]
    pub fn new(id: impl Into<ProjectId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            client_name: None,
            address: None,
            total_budget: None,
            status: ProjectStatus::Active,
        }
    }

    /// With client name
    #[inline]
    #[must_use]
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client_name = Some(client.into());
        self
    }

    /// With site address
    #[inline]
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// With total budget
    #[inline]
    #[must_use]
    pub fn with_total_budget(mut self, budget: f64) -> Self {
        self.total_budget = Some(budget);
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }
}

impl Row for Project {
    const ENTITY: &'static str = "project";
}
