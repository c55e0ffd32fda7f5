//! Vendor quote rows

use crate::ids::{ProjectId, QuoteId, TradeCategoryId};
use crate::row::Row;
use serde::{Deserialize, Serialize};

/// Trade bucket for quotes without a trade name
pub const OTHER_TRADE: &str = "Other";

/// Quote lifecycle status
///
/// `draft → sent → received → approved/signed/contract_sent/in_progress/completed`,
/// or `rejected`/`dead`. Unknown tokens are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuoteStatus {
    Draft,
    Sent,
    Received,
    Approved,
    Signed,
    ContractSent,
    InProgress,
    Completed,
    Rejected,
    Dead,
    Other(String),
}

impl QuoteStatus {
    /// Wire token
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            QuoteStatus::Draft => "draft",
            QuoteStatus::Sent => "sent",
            QuoteStatus::Received => "received",
            QuoteStatus::Approved => "approved",
            QuoteStatus::Signed => "signed",
            QuoteStatus::ContractSent => "contract_sent",
            QuoteStatus::InProgress => "in_progress",
            QuoteStatus::Completed => "completed",
            QuoteStatus::Rejected => "rejected",
            QuoteStatus::Dead => "dead",
            QuoteStatus::Other(token) => token,
        }
    }

    /// Whether the vendor has been engaged at this price
    #[inline]
    #[must_use]
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            QuoteStatus::Approved
                | QuoteStatus::Signed
                | QuoteStatus::ContractSent
                | QuoteStatus::InProgress
                | QuoteStatus::Completed
        )
    }
}

impl From<String> for QuoteStatus {
    fn from(token: String) -> Self {
        match token.as_str() {
            "draft" => QuoteStatus::Draft,
            "sent" => QuoteStatus::Sent,
            "received" => QuoteStatus::Received,
            "approved" => QuoteStatus::Approved,
            "signed" => QuoteStatus::Signed,
            "contract_sent" => QuoteStatus::ContractSent,
            "in_progress" => QuoteStatus::InProgress,
            "completed" => QuoteStatus::Completed,
            "rejected" => QuoteStatus::Rejected,
            "dead" => QuoteStatus::Dead,
            _ => QuoteStatus::Other(token),
        }
    }
}

impl From<QuoteStatus> for String {
    fn from(status: QuoteStatus) -> Self {
        match status {
            QuoteStatus::Other(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

/// Vendor quote for one trade on one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub trade_name: Option<String>,
    #[serde(default)]
    pub trade_category_id: Option<TradeCategoryId>,
    #[serde(default)]
    pub vendor_name: Option<String>,
    /// Budget allowance recorded against the trade
    #[serde(default)]
    pub budget_amount: Option<f64>,
    #[serde(default)]
    pub quoted_price: Option<f64>,
    pub status: QuoteStatus,
}

impl Quote {
    /// Create quote
    #[must_use]
    pub fn new(
        id: impl Into<QuoteId>,
        project_id: impl Into<ProjectId>,
        trade_name: Option<&str>,
        quoted_price: Option<f64>,
        status: QuoteStatus,
    ) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            trade_name: trade_name.map(str::to_string),
            trade_category_id: None,
            vendor_name: None,
            budget_amount: None,
            quoted_price,
            status,
        }
    }

    /// With budget allowance
    #[inline]
    #[must_use]
    pub fn with_budget(mut self, amount: f64) -> Self {
        self.budget_amount = Some(amount);
        self
    }

    /// With vendor name
    #[inline]
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor_name = Some(vendor.into());
        self
    }

    /// Grouping key: trimmed trade name, or [`OTHER_TRADE`] when null or blank
    ///
    /// Surrounding whitespace is not part of the key, so " Electrical" and
    /// "Electrical" land in one group under the trimmed name.
    #[must_use]
    pub fn trade_key(&self) -> &str {
        match self.trade_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => OTHER_TRADE,
        }
    }

    /// Price when it counts as a real quote (strictly positive)
    #[inline]
    #[must_use]
    pub fn priced(&self) -> Option<f64> {
        self.quoted_price.filter(|price| *price > 0.0)
    }
}

impl Row for Quote {
    const ENTITY: &'static str = "quote";
}
