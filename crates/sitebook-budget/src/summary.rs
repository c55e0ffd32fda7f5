//! Dashboard summary scalars

use crate::inputs::ScopedInputs;
use crate::rollup::ProjectRollup;
use crate::trade::TradeRollup;
use serde::Serialize;
use std::collections::HashSet;

/// Headline numbers for the budget dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    /// Sum of project budgets
    pub total_budgeted: f64,
    /// Sum of project actuals
    pub total_committed: f64,
    /// `total_committed - total_budgeted`; positive means over budget
    pub total_variance: f64,
    /// Trades with at least one quote priced above zero
    ///
    /// A trade whose quotes are all unpriced still counts toward
    /// `total_trades` and its own `quote_count`, but not here.
    pub trades_with_quotes: usize,
    /// Distinct trade names among the scoped quotes
    pub total_trades: usize,
    /// Whole percentage of trades that have been quoted
    pub percent_quoted: u32,
}

impl BudgetSummary {
    /// Derive the scalars from the project and trade rollups
    #[must_use]
    pub fn compute(
        scoped: &ScopedInputs<'_>,
        projects: &[ProjectRollup],
        trades: &[TradeRollup],
    ) -> Self {
        let total_budgeted: f64 = projects.iter().map(|p| p.budgeted).sum();
        let total_committed: f64 = projects.iter().map(|p| p.actual).sum();

        let trades_with_quotes = trades.iter().filter(|t| t.has_quotes()).count();
        let distinct: HashSet<&str> = scoped.quotes.iter().map(|q| q.trade_key()).collect();
        let total_trades = if distinct.is_empty() {
            trades_with_quotes
        } else {
            distinct.len()
        };

        Self {
            total_budgeted,
            total_committed,
            total_variance: total_committed - total_budgeted,
            trades_with_quotes,
            total_trades,
            percent_quoted: percent_quoted(trades_with_quotes, total_trades),
        }
    }
}

/// `round(100 * with_quotes / total)`, or 0 when there is nothing to divide by
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn percent_quoted(with_quotes: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * with_quotes as f64 / total as f64).round() as u32
}
