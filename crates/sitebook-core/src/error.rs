//! Error types for the dashboard service
//!
//! Covers:
//! - Row source failures (network, auth, backend, decode)
//! - Fetch timeouts
//! - Rollup and configuration errors

use sitebook_budget::BudgetError;
use sitebook_model::ModelError;
use sitebook_warroom::SortModeError;
use std::path::PathBuf;

/// Main dashboard error type
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// A row fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The joint fetch did not finish in time
    #[error("fetch timed out after {duration_secs}s")]
    Timeout { duration_secs: u64 },

    /// Budget rollup rejected its inputs
    #[error("budget rollup failed: {0}")]
    Budget(#[from] BudgetError),

    /// Unknown sort mode token
    #[error("invalid sort mode: {0}")]
    SortMode(#[from] SortModeError),

    /// Configuration value is unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file did not parse
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// File could not be read
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DashboardError {
    /// Check if retrying the same request may succeed
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Fetch(fetch) => fetch.is_retryable(),
            _ => false,
        }
    }

    /// Check if the error came from rows that break the data contract
    #[inline]
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::Decode(_)) | Self::Budget(_))
    }

    /// Create I/O error for a path
    #[inline]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ModelError> for DashboardError {
    fn from(err: ModelError) -> Self {
        Self::Fetch(FetchError::Decode(err))
    }
}

/// Row source errors
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure
    #[error("network error: {0}")]
    Network(String),

    /// Session is not allowed to read the rows
    #[error("unauthorized")]
    Unauthorized,

    /// Backend answered with an error
    #[error("backend error {status}: {message}")]
    Backend { status: u16, message: String },

    /// Rows arrived but broke the data contract
    #[error("decode error: {0}")]
    Decode(#[from] ModelError),
}

impl FetchError {
    /// Network failures and 5xx responses are transient
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Backend { status, .. } => *status >= 500,
            Self::Unauthorized | Self::Decode(_) => false,
        }
    }
}
