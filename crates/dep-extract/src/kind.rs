//! Manifest kinds and extraction dispatch

use crate::types::Dependency;
use crate::{Result, bazel, docker, meteor, npm, travis};

/// Supported manifest kinds
///
/// The enum is closed and `extract` matches it exhaustively, so adding a
/// kind is a compile-time-checked extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// `package.json`
    Npm,
    /// Meteor `package.js`
    Meteor,
    /// `Dockerfile`
    Docker,
    /// `.travis.yml`
    TravisNode,
    /// Bazel `WORKSPACE`
    Bazel,
}

impl ManifestKind {
    /// Detect the manifest kind from a file name or path suffix
    ///
    /// Returns `None` for unrecognized names; the caller treats that as an
    /// empty dependency list, not an error.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        if file_name.ends_with("package.json") {
            Some(Self::Npm)
        } else if file_name.ends_with("package.js") {
            Some(Self::Meteor)
        } else if file_name.ends_with("Dockerfile") {
            Some(Self::Docker)
        } else if file_name.ends_with(".travis.yml") {
            Some(Self::TravisNode)
        } else if file_name.ends_with("WORKSPACE") {
            Some(Self::Bazel)
        } else {
            None
        }
    }

    /// Extract dependency references from manifest content
    ///
    /// `dep_type` selects the manifest section for kinds that have sections
    /// (npm); the other kinds ignore it. Extraction order is the manifest
    /// declaration order.
    ///
    /// # Errors
    ///
    /// Each extractor owns its error contract; malformed content for the
    /// structured formats (JSON, YAML) is an error, while the line-oriented
    /// extractors yield whatever stanzas they recognize.
    pub fn extract(self, content: &str, dep_type: Option<&str>) -> Result<Vec<Dependency>> {
        match self {
            Self::Npm => npm::extract_dependencies(content, dep_type),
            Self::Meteor => Ok(meteor::extract_dependencies(content)),
            Self::Docker => Ok(docker::extract_dependencies(content)),
            Self::TravisNode => travis::extract_dependencies(content),
            Self::Bazel => Ok(bazel::extract_dependencies(content)),
        }
    }
}
