//! Error types for row decoding
//!
//! Rows that break the upstream contract are rejected, never coerced.

/// Row model errors
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Collection payload was not a JSON array
    #[error("expected an array of {entity} rows")]
    NotAnArray { entity: &'static str },

    /// A single row is missing a required field or has the wrong shape
    #[error("malformed {entity} row at index {index}: {message}")]
    MalformedRow {
        entity: &'static str,
        index: usize,
        message: String,
    },

    /// Token outside a closed enumeration
    #[error("unknown {kind} token: '{token}'")]
    UnknownToken { kind: &'static str, token: String },

    /// Payload was not valid JSON at all
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Create unknown token error
    #[inline]
    pub fn unknown_token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::UnknownToken {
            kind,
            token: token.into(),
        }
    }

    /// Index of the offending row, if the error is row-scoped
    #[inline]
    #[must_use]
    pub fn row_index(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { index, .. } => Some(*index),
            _ => None,
        }
    }
}
