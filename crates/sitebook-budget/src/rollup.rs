//! Area and project rollups
//!
//! Line items are summed per area; project totals are the sums of their
//! areas. Groups with no financial activity (both sums zero) are dropped.

use crate::inputs::ScopedInputs;
use serde::Serialize;
use sitebook_model::{AreaId, BudgetArea, ProjectId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    budgeted: f64,
    actual: f64,
}

impl Totals {
    fn add(&mut self, other: Totals) {
        self.budgeted += other.budgeted;
        self.actual += other.actual;
    }

    fn is_zero(self) -> bool {
        self.budgeted == 0.0 && self.actual == 0.0
    }

    fn remaining(self) -> f64 {
        (self.budgeted - self.actual).max(0.0)
    }
}

/// Budgeted vs. actual for one area
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRollup {
    /// Area
    pub area_id: AreaId,
    /// Owning project
    pub project_id: ProjectId,
    /// Area display name
    pub name: String,
    /// Sum of budgeted amounts
    pub budgeted: f64,
    /// Sum of actual amounts
    pub actual: f64,
    /// `max(0, budgeted - actual)`
    pub remaining: f64,
}

impl AreaRollup {
    /// Actual spend as a percentage of budget; 0 when nothing was budgeted
    #[must_use]
    pub fn percent_used(&self) -> f64 {
        percent_used(self.budgeted, self.actual)
    }

    /// `actual - budgeted`; positive means over budget
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }
}

/// Budgeted vs. actual for one project
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRollup {
    /// Project
    pub project_id: ProjectId,
    /// Project name
    pub name: String,
    /// Sum of budgeted amounts over all areas
    pub budgeted: f64,
    /// Sum of actual amounts over all areas
    pub actual: f64,
    /// `max(0, budgeted - actual)`
    pub remaining: f64,
}

impl ProjectRollup {
    /// Actual spend as a percentage of budget; 0 when nothing was budgeted
    #[must_use]
    pub fn percent_used(&self) -> f64 {
        percent_used(self.budgeted, self.actual)
    }

    /// `actual - budgeted`; positive means over budget
    #[must_use]
    pub fn variance(&self) -> f64 {
        self.actual - self.budgeted
    }
}

fn percent_used(budgeted: f64, actual: f64) -> f64 {
    if budgeted == 0.0 {
        0.0
    } else {
        actual / budgeted * 100.0
    }
}

// Per-area totals over the scoped line items; items of unknown areas are ignored
fn area_totals<'a>(scoped: &ScopedInputs<'a>) -> HashMap<&'a AreaId, Totals> {
    let mut totals: HashMap<&AreaId, Totals> = scoped
        .areas
        .iter()
        .map(|area| (&area.id, Totals::default()))
        .collect();

    for item in &scoped.line_items {
        if let Some(area) = totals.get_mut(&item.area_id) {
            area.add(Totals {
                budgeted: item.budgeted(),
                actual: item.actual(),
            });
        }
    }
    totals
}

fn areas_in_display_order<'a>(scoped: &ScopedInputs<'a>) -> Vec<&'a BudgetArea> {
    let mut areas = scoped.areas.clone();
    areas.sort_by_key(|area| area.sort_order);
    areas
}

/// Roll line items up by area, in area `sort_order`
#[must_use]
pub fn rollup_by_area(scoped: &ScopedInputs<'_>) -> Vec<AreaRollup> {
    let totals = area_totals(scoped);

    areas_in_display_order(scoped)
        .into_iter()
        .filter_map(|area| {
            let t = totals.get(&area.id).copied().unwrap_or_default();
            (!t.is_zero()).then(|| AreaRollup {
                area_id: area.id.clone(),
                project_id: area.project_id.clone(),
                name: area.name.clone(),
                budgeted: t.budgeted,
                actual: t.actual,
                remaining: t.remaining(),
            })
        })
        .collect()
}

/// Roll area totals up by project, in project input order
#[must_use]
pub fn rollup_by_project(scoped: &ScopedInputs<'_>) -> Vec<ProjectRollup> {
    let by_area = area_totals(scoped);

    let mut by_project: HashMap<&ProjectId, Totals> = HashMap::new();
    for area in areas_in_display_order(scoped) {
        if let Some(t) = by_area.get(&area.id) {
            by_project.entry(&area.project_id).or_default().add(*t);
        }
    }

    scoped
        .projects
        .iter()
        .filter_map(|project| {
            let t = by_project.get(&project.id).copied().unwrap_or_default();
            (!t.is_zero()).then(|| ProjectRollup {
                project_id: project.id.clone(),
                name: project.name.clone(),
                budgeted: t.budgeted,
                actual: t.actual,
                remaining: t.remaining(),
            })
        })
        .collect()
}
