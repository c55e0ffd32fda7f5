//! Quote comparison per trade

use crate::inputs::ScopedInputs;
use indexmap::IndexMap;
use serde::Serialize;
use sitebook_model::text::locale_cmp;
use sitebook_model::Quote;

/// Quotes for one trade compared against its allowance
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRollup {
    /// Trade name, or `"Other"`
    pub trade: String,
    /// Largest recorded allowance; it is a single figure, not a sum
    pub budget_allowance: Option<f64>,
    /// Cheapest priced quote
    pub lowest_quote: Option<f64>,
    /// Price of the first committed quote in input order
    pub approved_quote: Option<f64>,
    /// Committed price exceeds a positive allowance
    pub is_approved_over_budget: bool,
    /// Cheapest price undercuts a positive allowance
    pub is_lowest_under_budget: bool,
    /// Every quote in the group, priced or not
    pub quote_count: usize,
}

impl TradeRollup {
    fn from_group(trade: &str, quotes: &[&Quote]) -> Self {
        let budget_allowance = quotes
            .iter()
            .filter_map(|q| q.budget_amount)
            .reduce(f64::max);
        let lowest_quote = quotes.iter().filter_map(|q| q.priced()).reduce(f64::min);
        let approved_quote = quotes
            .iter()
            .find(|q| q.status.is_committed())
            .and_then(|q| q.quoted_price);

        let allowance = budget_allowance.filter(|a| *a > 0.0);
        let is_approved_over_budget = matches!(
            (approved_quote, allowance),
            (Some(price), Some(limit)) if price > limit
        );
        let is_lowest_under_budget = matches!(
            (lowest_quote, allowance),
            (Some(price), Some(limit)) if price < limit
        );

        Self {
            trade: trade.to_string(),
            budget_allowance,
            lowest_quote,
            approved_quote,
            is_approved_over_budget,
            is_lowest_under_budget,
            quote_count: quotes.len(),
        }
    }

    /// Whether any quote in the trade carries a usable price
    #[inline]
    #[must_use]
    pub fn has_quotes(&self) -> bool {
        self.lowest_quote.is_some()
    }

    fn is_empty(&self) -> bool {
        self.budget_allowance.map_or(true, |a| a <= 0.0)
            && self.lowest_quote.is_none()
            && self.approved_quote.is_none()
    }
}

/// Group scoped quotes by trade, alphabetically by trade name
///
/// Trades with neither a positive allowance nor any price are left out.
#[must_use]
pub fn rollup_by_trade(scoped: &ScopedInputs<'_>) -> Vec<TradeRollup> {
    let mut groups: IndexMap<&str, Vec<&Quote>> = IndexMap::new();
    for quote in scoped.quotes.iter().copied() {
        groups.entry(quote.trade_key()).or_default().push(quote);
    }

    let mut trades: Vec<TradeRollup> = groups
        .iter()
        .map(|(trade, quotes)| TradeRollup::from_group(trade, quotes))
        .filter(|rollup| !rollup.is_empty())
        .collect();
    trades.sort_by(|a, b| locale_cmp(&a.trade, &b.trade));
    trades
}
