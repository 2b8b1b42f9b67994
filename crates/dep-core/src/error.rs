//! Error types for dep-core

use crate::worker::WorkerError;

/// Result type for dep-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can fail a manifest-scope run
///
/// A failure anywhere in the pipeline fails the scope as a whole; other
/// scopes run by the same engine are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error from rule matching or resolution
    #[error(transparent)]
    Config(#[from] dep_config::Error),

    /// Extraction error from a manifest extractor
    #[error(transparent)]
    Extract(#[from] dep_extract::Error),

    /// An upgrade-worker invocation failed
    #[error(transparent)]
    Worker(#[from] WorkerError),

    /// An upgrade-worker task panicked or was cancelled
    #[error("Upgrade worker task for {dep_name} did not complete: {source}")]
    WorkerJoin {
        dep_name: String,
        source: tokio::task::JoinError,
    },
}
