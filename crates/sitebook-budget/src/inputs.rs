//! Rollup inputs and project scoping

use crate::error::BudgetError;
use serde::{Deserialize, Serialize};
use sitebook_model::{AreaId, BudgetArea, LineItem, Project, ProjectId, Quote};
use std::collections::HashSet;

/// The four fetched budget collections, unfiltered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetInputs {
    /// All projects
    pub projects: Vec<Project>,
    /// All budget areas
    pub areas: Vec<BudgetArea>,
    /// All budget line items
    pub line_items: Vec<LineItem>,
    /// All quotes
    pub quotes: Vec<Quote>,
}

impl BudgetInputs {
    /// Create inputs from fetched collections
    #[must_use]
    pub fn new(
        projects: Vec<Project>,
        areas: Vec<BudgetArea>,
        line_items: Vec<LineItem>,
        quotes: Vec<Quote>,
    ) -> Self {
        Self {
            projects,
            areas,
            line_items,
            quotes,
        }
    }

    /// Restrict every collection to one project, or borrow everything
    ///
    /// Areas and quotes are matched on their project id; line items follow
    /// transitively through the scoped areas.
    #[must_use]
    pub fn scoped(&self, scope: Option<&ProjectId>) -> ScopedInputs<'_> {
        let Some(project_id) = scope else {
            return ScopedInputs {
                projects: self.projects.iter().collect(),
                areas: self.areas.iter().collect(),
                line_items: self.line_items.iter().collect(),
                quotes: self.quotes.iter().collect(),
            };
        };

        let areas: Vec<&BudgetArea> = self
            .areas
            .iter()
            .filter(|area| &area.project_id == project_id)
            .collect();
        let area_ids: HashSet<&AreaId> = areas.iter().copied().map(|area| &area.id).collect();

        ScopedInputs {
            projects: self
                .projects
                .iter()
                .filter(|project| &project.id == project_id)
                .collect(),
            line_items: self
                .line_items
                .iter()
                .filter(|item| area_ids.contains(&item.area_id))
                .collect(),
            quotes: self
                .quotes
                .iter()
                .filter(|quote| &quote.project_id == project_id)
                .collect(),
            areas,
        }
    }
}

/// Borrowed, project-scoped slice of [`BudgetInputs`]
#[derive(Debug, Clone, Default)]
pub struct ScopedInputs<'a> {
    /// Projects in scope
    pub projects: Vec<&'a Project>,
    /// Areas in scope
    pub areas: Vec<&'a BudgetArea>,
    /// Line items in scope
    pub line_items: Vec<&'a LineItem>,
    /// Quotes in scope
    pub quotes: Vec<&'a Quote>,
}

impl ScopedInputs<'_> {
    /// Reject NaN and infinite amounts before anything is summed
    ///
    /// # Errors
    /// [`BudgetError::NonFiniteAmount`] for the first offending column.
    pub fn validate(&self) -> Result<(), BudgetError> {
        for item in &self.line_items {
            check_finite("line item", item.id.as_str(), "budgeted_amount", item.budgeted_amount)?;
            check_finite("line item", item.id.as_str(), "actual_amount", item.actual_amount)?;
        }
        for quote in &self.quotes {
            check_finite("quote", quote.id.as_str(), "budget_amount", quote.budget_amount)?;
            check_finite("quote", quote.id.as_str(), "quoted_price", quote.quoted_price)?;
        }
        Ok(())
    }
}

fn check_finite(
    entity: &'static str,
    id: &str,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), BudgetError> {
    match value {
        Some(v) if !v.is_finite() => Err(BudgetError::non_finite(entity, id, field, v)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebook_model::QuoteStatus;

    fn inputs() -> BudgetInputs {
        BudgetInputs::new(
            vec![Project::new("p1", "Harbor House"), Project::new("p2", "Alder Court")],
            vec![
                BudgetArea::new("a1", "p1", "Kitchen", 1),
                BudgetArea::new("b1", "p2", "Whole House", 1),
            ],
            vec![
                LineItem::new("li1", "a1", Some(10.0), None),
                LineItem::new("li2", "b1", Some(20.0), None),
                LineItem::new("li3", "zz", Some(30.0), None),
            ],
            vec![
                Quote::new("q1", "p1", Some("Framing"), Some(5.0), QuoteStatus::Draft),
                Quote::new("q2", "p2", Some("Framing"), Some(6.0), QuoteStatus::Draft),
            ],
        )
    }

    #[test]
    fn unscoped_borrows_everything() {
        let inputs = inputs();
        let scoped = inputs.scoped(None);
        assert_eq!(scoped.projects.len(), 2);
        assert_eq!(scoped.areas.len(), 2);
        assert_eq!(scoped.line_items.len(), 3);
        assert_eq!(scoped.quotes.len(), 2);
    }

    #[test]
    fn scope_follows_area_to_line_items() {
        let inputs = inputs();
        let scope = ProjectId::new("p1");
        let scoped = inputs.scoped(Some(&scope));

        assert_eq!(scoped.projects.len(), 1);
        assert_eq!(scoped.areas[0].id.as_str(), "a1");
        let items: Vec<&str> = scoped.line_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(items, ["li1"]);
        assert_eq!(scoped.quotes[0].id.as_str(), "q1");
    }

    #[test]
    fn unknown_scope_is_empty() {
        let inputs = inputs();
        let scope = ProjectId::new("p404");
        let scoped = inputs.scoped(Some(&scope));
        assert!(scoped.projects.is_empty());
        assert!(scoped.line_items.is_empty());
    }

    #[test]
    fn validate_rejects_nan() {
        let mut inputs = inputs();
        inputs.quotes[1].quoted_price = Some(f64::NAN);

        assert!(inputs.scoped(None).validate().is_err());
        // Out-of-scope rows are never consumed
        assert!(inputs.scoped(Some(&ProjectId::new("p1"))).validate().is_ok());
    }
}
