//! Upgrade records and the per-dependency worker boundary

use async_trait::async_trait;
use dep_config::ScopeConfig;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Kind of version jump an upgrade proposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateType {
    Major,
    Minor,
    Patch,
    /// Replace a range with an exact version
    Pin,
    /// Same version, new content digest
    Digest,
}

impl UpdateType {
    /// Classify the jump between two released versions
    pub fn between(current: &Version, next: &Version) -> Self {
        if next.major != current.major {
            Self::Major
        } else if next.minor != current.minor {
            Self::Minor
        } else {
            Self::Patch
        }
    }
}

/// One proposed version change for one dependency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Upgrade {
    pub dep_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<String>,
    pub current_value: String,
    pub new_value: String,
    pub update_type: UpdateType,
}

/// Failure from one upgrade-worker invocation
#[derive(Debug, thiserror::Error)]
#[error("Upgrade lookup for {dep_name} failed: {message}")]
pub struct WorkerError {
    pub dep_name: String,
    pub message: String,
}

impl WorkerError {
    pub fn new(dep_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            dep_name: dep_name.into(),
            message: message.into(),
        }
    }
}

/// Per-dependency upgrade lookup
///
/// Implementations own their registry access and any rate limiting. The
/// engine hands each invocation an independent resolved config and never
/// shares state between invocations, so implementations may run them
/// concurrently without coordination.
#[async_trait]
pub trait UpgradeWorker: Send + Sync {
    /// Propose zero or more upgrades for the dependency described by
    /// `config`
    async fn find_upgrades(&self, config: &ScopeConfig) -> Result<Vec<Upgrade>, WorkerError>;
}
