//! Error types for the War Room pipeline

/// Sort mode token could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortModeError {
    /// Token is not one of the eight sort modes
    #[error("unknown sort mode: '{0}'")]
    Unknown(String),
}
