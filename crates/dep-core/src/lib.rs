//! Update orchestration for dep-manager
//!
//! This crate coordinates the two library layers below it and owns the
//! external worker boundary:
//!
//! ```text
//!          UpdateEngine (per manifest scope)
//!               |                     \
//!          dep-extract            dep-config
//!        (manifest -> deps)   (rules -> resolved config)
//!               |
//!        UpgradeWorker (external, async, one call per dependency)
//! ```
//!
//! The engine itself performs no I/O; registry access belongs to the
//! [`UpgradeWorker`] implementation.

pub mod context;
pub mod engine;
pub mod error;
pub mod worker;

pub use context::RunContext;
pub use engine::UpdateEngine;
pub use error::{Error, Result};
pub use worker::{UpdateType, Upgrade, UpgradeWorker, WorkerError};
