//! Error types for dep-config

/// Result type for dep-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while matching rules or resolving configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `packagePatterns`/`excludePackagePatterns` entry failed to compile
    #[error("Invalid package pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// A `packageRules` entry (or the field itself) has the wrong shape
    #[error("Invalid package rule at index {index}: {message}")]
    InvalidRule { index: usize, message: String },

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
