//! Per-dependency configuration resolution
//!
//! Folds a dependency's seed config through the scope's `packageRules` in
//! declaration order, then projects the result to package granularity.

use tracing::{debug, trace};

use crate::rule::RuleMatcher;
use crate::schema::{self, ScopeLevel};
use crate::{Result, ScopeConfig};

/// Resolve the effective configuration for one dependency
///
/// `dep_fields` is the dependency projected to config fields (`depName`,
/// `currentValue`, `depType`). The fold applies matching rules cumulatively
/// in declaration order, so a later rule overrides fields set by an earlier
/// one, and produces a fresh value at each step; nothing is shared with
/// other resolutions.
///
/// Rule predicates always see the dependency's original name: an override
/// that happens to set `depName` does not re-route later rules.
///
/// # Errors
///
/// Fails when a `packageRules` entry is malformed or carries a pattern that
/// does not compile. The scope's resolution aborts rather than treating the
/// broken rule as a non-match.
pub fn resolve_dep_config(base: &ScopeConfig, dep_fields: &ScopeConfig) -> Result<ScopeConfig> {
    let seed = base.merge_child(dep_fields);
    let dep_name = seed.dep_name().unwrap_or_default().to_string();
    let rules = seed.package_rules()?;
    debug!(
        dep_name = %dep_name,
        rule_count = rules.len(),
        "resolving dependency config"
    );

    let resolved = rules
        .iter()
        .enumerate()
        .try_fold(seed, |working, (index, rule)| -> Result<ScopeConfig> {
            let matcher = RuleMatcher::compile(rule)?;
            if !matcher.applies(&dep_name) {
                return Ok(working);
            }
            trace!(dep_name = %dep_name, index, "package rule applies");
            Ok(working.merge_child(&ScopeConfig::from(rule.overrides.clone())))
        })?;

    Ok(schema::filter_config(&resolved, ScopeLevel::Package))
}
