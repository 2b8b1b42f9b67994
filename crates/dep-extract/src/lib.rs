//! Manifest dependency extraction for dep-manager
//!
//! Each extractor is a pure function from manifest content to a list of
//! [`Dependency`] references, in manifest declaration order. Dispatch is by
//! [`ManifestKind`], detected from the manifest file-name suffix:
//!
//! | Suffix | Kind |
//! |---|---|
//! | `package.json` | npm dependency sections |
//! | `package.js` | Meteor `Npm.depends` |
//! | `Dockerfile` | base images |
//! | `.travis.yml` | node runtime versions |
//! | `WORKSPACE` | Bazel `git_repository` stanzas |

pub mod bazel;
pub mod docker;
pub mod error;
pub mod kind;
pub mod meteor;
pub mod npm;
pub mod travis;
pub mod types;

pub use error::{Error, Result};
pub use kind::ManifestKind;
pub use types::Dependency;
