//! Assembled budget view model

use crate::error::BudgetError;
use crate::inputs::BudgetInputs;
use crate::rollup::{rollup_by_area, rollup_by_project, AreaRollup, ProjectRollup};
use crate::summary::BudgetSummary;
use crate::trade::{rollup_by_trade, TradeRollup};
use serde::Serialize;
use sitebook_model::ProjectId;

/// Everything the budget dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetView {
    /// Areas with activity, in display order
    pub budget_by_area: Vec<AreaRollup>,
    /// Projects with activity, in input order
    pub budget_by_project: Vec<ProjectRollup>,
    /// Trades with an allowance or price, alphabetical
    pub quotes_by_trade: Vec<TradeRollup>,
    /// Headline scalars
    #[serde(flatten)]
    pub summary: BudgetSummary,
}

/// Scope the inputs and run every rollup
///
/// An unknown project id yields an empty view.
///
/// # Errors
/// [`BudgetError::NonFiniteAmount`] when a scoped amount is NaN or infinite.
pub fn build_budget_view(
    inputs: &BudgetInputs,
    scope: Option<&ProjectId>,
) -> Result<BudgetView, BudgetError> {
    let scoped = inputs.scoped(scope);
    scoped.validate()?;

    let budget_by_area = rollup_by_area(&scoped);
    let budget_by_project = rollup_by_project(&scoped);
    let quotes_by_trade = rollup_by_trade(&scoped);
    let summary = BudgetSummary::compute(&scoped, &budget_by_project, &quotes_by_trade);

    Ok(BudgetView {
        budget_by_area,
        budget_by_project,
        quotes_by_trade,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sitebook_test_utils::sample_budget;

    fn inputs() -> BudgetInputs {
        let fixture = sample_budget();
        BudgetInputs::new(fixture.projects, fixture.areas, fixture.line_items, fixture.quotes)
    }

    #[test]
    fn portfolio_view() {
        let view = build_budget_view(&inputs(), None).unwrap();

        let areas: Vec<&str> = view.budget_by_area.iter().map(|a| a.name.as_str()).collect();
        // Site Work has no activity; b1 sorts with Kitchen at order 1
        assert_eq!(areas, ["Kitchen", "Whole House", "Bath"]);

        let projects: Vec<(&str, f64, f64)> = view
            .budget_by_project
            .iter()
            .map(|p| (p.project_id.as_str(), p.budgeted, p.actual))
            .collect();
        assert_eq!(projects, [("p1", 1500.0, 800.0), ("p2", 2500.0, 1000.0)]);

        assert_eq!(view.summary.total_budgeted, 4000.0);
        assert_eq!(view.summary.total_committed, 1800.0);
        assert_eq!(view.summary.total_variance, -2200.0);
        assert_eq!(view.summary.trades_with_quotes, 3);
        assert_eq!(view.summary.total_trades, 3);
        assert_eq!(view.summary.percent_quoted, 100);
    }

    #[test]
    fn scoped_view() {
        let scope = ProjectId::new("p2");
        let view = build_budget_view(&inputs(), Some(&scope)).unwrap();

        assert_eq!(view.budget_by_area.len(), 1);
        assert_eq!(view.budget_by_project[0].name, "Alder Court");
        assert_eq!(view.quotes_by_trade.len(), 1);
        let plumbing = &view.quotes_by_trade[0];
        assert_eq!(plumbing.trade, "Plumbing");
        assert!(plumbing.is_approved_over_budget);
        assert!(!plumbing.is_lowest_under_budget);
    }

    #[test]
    fn unknown_scope_is_empty_view() {
        let scope = ProjectId::new("p404");
        let view = build_budget_view(&inputs(), Some(&scope)).unwrap();

        assert!(view.budget_by_area.is_empty());
        assert!(view.budget_by_project.is_empty());
        assert!(view.quotes_by_trade.is_empty());
        assert_eq!(view.summary.percent_quoted, 0);
    }

    #[test]
    fn infinite_amount_is_rejected() {
        let mut inputs = inputs();
        inputs.line_items[0].actual_amount = Some(f64::INFINITY);

        let err = build_budget_view(&inputs, None).unwrap_err();
        assert!(matches!(err, BudgetError::NonFiniteAmount { field: "actual_amount", .. }));
    }

    #[test]
    fn summary_is_flattened_on_the_wire() {
        let view = build_budget_view(&inputs(), None).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["percentQuoted"], 100);
        assert_eq!(json["totalBudgeted"], 4000.0);
        assert!(json["budgetByArea"].is_array());
        assert!(json.get("summary").is_none());
    }
}
