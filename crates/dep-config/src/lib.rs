//! Dependency-update configuration for dep-manager
//!
//! This crate implements the configuration side of the update pipeline:
//!
//! - **ScopeConfig**: the configuration object active at one scope level,
//!   with shallow child-over-parent merging
//! - **PackageRule / RuleMatcher**: name- and pattern-based conditional
//!   overrides, exclusion dominating inclusion
//! - **resolve_dep_config**: the left fold producing one effective config
//!   per dependency
//! - **ScopeLevel / filter_config**: projection of a resolved config to the
//!   fields meaningful at package granularity
//!
//! Everything here is pure and synchronous; orchestration and I/O live in
//! `dep-core`.

pub mod config;
pub mod error;
pub mod resolver;
pub mod rule;
pub mod schema;

pub use config::ScopeConfig;
pub use error::{Error, Result};
pub use resolver::resolve_dep_config;
pub use rule::{PackageRule, RuleMatcher};
pub use schema::{ScopeLevel, filter_config};
