//! Query parsing and term matching

use sitebook_model::text::{contains_folded, fold};

/// Parsed palette query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Split on whitespace and fold each term
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self {
            terms: input.split_whitespace().map(fold).collect(),
        }
    }

    /// Folded terms in query order
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Blank queries match nothing
    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every term is found in at least one field
    #[must_use]
    pub fn matches(&self, fields: &[Option<&str>]) -> bool {
        !self.is_blank()
            && self.terms.iter().all(|term| {
                fields
                    .iter()
                    .flatten()
                    .any(|field| contains_folded(field, term))
            })
    }
}
