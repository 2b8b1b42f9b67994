//! Scope levels and config projection
//!
//! Each known option is registered with the narrowest scope level at which
//! it still applies. Filtering a config to a level keeps the options that
//! reach that level and drops everything else, including bookkeeping fields
//! that only drive broader scopes.

use crate::ScopeConfig;

/// Levels of the configuration scope hierarchy, broadest first
///
/// The level is a closed enum, so an unknown level tag is unrepresentable;
/// `filter_config` is total over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScopeLevel {
    Global,
    Repository,
    Manifest,
    DepType,
    Package,
}

struct OptionDef {
    name: &'static str,
    /// Narrowest level at which the option still applies
    level: ScopeLevel,
}

const fn opt(name: &'static str, level: ScopeLevel) -> OptionDef {
    OptionDef { name, level }
}

/// Known configuration options and how deep into the hierarchy they reach
const OPTIONS: &[OptionDef] = &[
    // scope identification and bookkeeping
    opt("repository", ScopeLevel::Repository),
    opt("packageFile", ScopeLevel::Manifest),
    opt("ignoreDeps", ScopeLevel::Manifest),
    opt("monorepoPackages", ScopeLevel::Manifest),
    opt("lerna", ScopeLevel::Manifest),
    opt("workspaces", ScopeLevel::Manifest),
    opt("workspaceDir", ScopeLevel::Manifest),
    opt("packageRules", ScopeLevel::DepType),
    // intrinsic dependency fields
    opt("depName", ScopeLevel::Package),
    opt("currentValue", ScopeLevel::Package),
    opt("currentVersion", ScopeLevel::Package),
    opt("depType", ScopeLevel::Package),
    // update behaviour
    opt("enabled", ScopeLevel::Package),
    opt("rangeStrategy", ScopeLevel::Package),
    opt("pinVersions", ScopeLevel::Package),
    opt("separateMajorMinor", ScopeLevel::Package),
    opt("separateMultipleMajor", ScopeLevel::Package),
    opt("ignoreUnstable", ScopeLevel::Package),
    opt("respectLatest", ScopeLevel::Package),
    opt("allowedVersions", ScopeLevel::Package),
    // scheduling and automation
    opt("schedule", ScopeLevel::Package),
    opt("automerge", ScopeLevel::Package),
    opt("automergeType", ScopeLevel::Package),
    opt("rebaseStalePrs", ScopeLevel::Package),
    // presentation
    opt("groupName", ScopeLevel::Package),
    opt("groupSlug", ScopeLevel::Package),
    opt("labels", ScopeLevel::Package),
    opt("assignees", ScopeLevel::Package),
    opt("reviewers", ScopeLevel::Package),
    opt("branchPrefix", ScopeLevel::Package),
    opt("semanticCommits", ScopeLevel::Package),
    opt("commitMessage", ScopeLevel::Package),
    opt("prTitle", ScopeLevel::Package),
    opt("prBody", ScopeLevel::Package),
    // hints consumed by the upgrade worker
    opt("registryUrls", ScopeLevel::Package),
    opt("versioning", ScopeLevel::Package),
];

/// Project a config down to the options meaningful at the given level
///
/// Unregistered fields are dropped. Idempotent: filtering an already
/// filtered config is a no-op.
pub fn filter_config(config: &ScopeConfig, level: ScopeLevel) -> ScopeConfig {
    config.project(|field| {
        OPTIONS
            .iter()
            .any(|option| option.name == field && option.level >= level)
    })
}
