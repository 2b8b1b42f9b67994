//! Error types for dep-extract

/// Result type for dep-extract operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting dependencies from a manifest
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest content did not have the expected shape
    #[error("Failed to parse {kind} manifest: {message}")]
    Malformed { kind: &'static str, message: String },

    /// JSON parse error (package.json)
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parse error (.travis.yml)
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn malformed(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            kind,
            message: message.into(),
        }
    }
}
