//! Explicit diagnostic context for a scope run

use dep_config::ScopeConfig;

/// Identifies one manifest-scope run in logs
///
/// Threaded as a value through the engine rather than stored in ambient
/// logger state, so concurrent scope runs cannot clobber each other's
/// correlation fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    pub repository: Option<String>,
    pub package_file: Option<String>,
    pub dep_type: Option<String>,
}

impl RunContext {
    /// Capture the correlation fields from a scope config
    pub fn from_config(config: &ScopeConfig) -> Self {
        Self {
            repository: config.repository().map(str::to_string),
            package_file: config.package_file().map(str::to_string),
            dep_type: config.dep_type().map(str::to_string),
        }
    }
}
