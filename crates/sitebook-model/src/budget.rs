//! Budget hierarchy rows
//!
//! Project 1—* BudgetArea 1—* LineItem. Amount columns are nullable and
//! count as zero when absent.

use crate::ids::{AreaId, LineItemId, ProjectId};
use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Named budget area within a project (e.g. "Kitchen", "Site Work")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetArea {
    pub id: AreaId,
    pub project_id: ProjectId,
    pub name: String,
    /// Display order within the project, ascending
    pub sort_order: i32,
}

impl BudgetArea {
    /// Create budget area
    #[must_use]
    pub fn new(
        id: impl Into<AreaId>,
        project_id: impl Into<ProjectId>,
        name: impl Into<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            name: name.into(),
            sort_order,
        }
    }
}

impl Row for BudgetArea {
    const ENTITY: &'static str = "budget area";
}

/// Single budget line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub area_id: AreaId,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub budgeted_amount: Option<f64>,
    #[serde(default)]
    pub actual_amount: Option<f64>,
}

impl LineItem {
    /// Create line item
    #[must_use]
    pub fn new(
        id: impl Into<LineItemId>,
        area_id: impl Into<AreaId>,
        budgeted_amount: Option<f64>,
        actual_amount: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            area_id: area_id.into(),
            description: None,
            budgeted_amount,
            actual_amount,
        }
    }

    /// Budgeted amount, zero when absent
    #[inline]
    #[must_use]
    pub fn budgeted(&self) -> f64 {
        self.budgeted_amount.unwrap_or(0.0)
    }

    /// Actual amount, zero when absent
    #[inline]
    #[must_use]
    pub fn actual(&self) -> f64 {
        self.actual_amount.unwrap_or(0.0)
    }
}

impl Row for LineItem {
    const ENTITY: &'static str = "line item";
}
