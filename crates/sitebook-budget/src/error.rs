//! Error types for budget rollups

/// Rollup errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BudgetError {
    /// An amount column held NaN or infinity
    #[error("non-finite {field} on {entity} '{id}': {value}")]
    NonFiniteAmount {
        /// Row entity name
        entity: &'static str,
        /// Row identifier
        id: String,
        /// Column name
        field: &'static str,
        /// Offending value
        value: f64,
    },
}

impl BudgetError {
    /// Create non-finite amount error
    #[inline]
    pub fn non_finite(
        entity: &'static str,
        id: impl Into<String>,
        field: &'static str,
        value: f64,
    ) -> Self {
        Self::NonFiniteAmount {
            entity,
            id: id.into(),
            field,
            value,
        }
    }
}
