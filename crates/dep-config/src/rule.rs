//! Package rules and the matcher deciding whether a rule applies
//!
//! A package rule is a conditional override: four predicate fields select
//! dependencies by name, every other field is an override value merged into
//! a matched dependency's config.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{Error, Result};

/// Inclusion patterns treated as match-everything wildcards
const WILDCARD_PATTERNS: [&str; 2] = ["*", "^*$"];

/// One entry of a `packageRules` array
///
/// Keeping the predicates as typed fields means they never travel with the
/// overrides into a merged config, so they cannot leak into a resolved
/// result or be mistaken for scope-level options by a later merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageRule {
    /// Exact-name inclusion predicate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_names: Option<Vec<String>>,

    /// Regex inclusion predicates; `*` and `^*$` match everything
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_patterns: Option<Vec<String>>,

    /// Exact-name exclusion predicate, evaluated after inclusion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_package_names: Option<Vec<String>>,

    /// Regex exclusion predicates, evaluated after inclusion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_package_patterns: Option<Vec<String>>,

    /// Override values applied when the rule matches
    #[serde(flatten)]
    pub overrides: Map<String, Value>,
}

impl PackageRule {
    /// True when the rule carries no inclusion predicate and therefore
    /// matches every dependency
    pub fn is_wildcard(&self) -> bool {
        self.package_names.is_none() && self.package_patterns.is_none()
    }
}

/// Compiled matcher for one rule
///
/// Patterns compile once per rule, so an invalid pattern surfaces as a
/// single configuration error and `applies` stays infallible.
#[derive(Debug)]
pub struct RuleMatcher {
    wildcard: bool,
    include_names: Vec<String>,
    include_patterns: Vec<Regex>,
    exclude_names: Vec<String>,
    exclude_patterns: Vec<Regex>,
}

impl RuleMatcher {
    /// Compile every pattern in the rule's predicates
    ///
    /// Inclusion wildcards (`*`, `^*$`) are normalized to match-all before
    /// compilation. Exclusion patterns are compiled as written.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPattern` naming the offending pattern when a
    /// regex fails to compile.
    pub fn compile(rule: &PackageRule) -> Result<Self> {
        Ok(Self {
            wildcard: rule.is_wildcard(),
            include_names: rule.package_names.clone().unwrap_or_default(),
            include_patterns: compile_patterns(
                rule.package_patterns.as_deref().unwrap_or_default(),
                true,
            )?,
            exclude_names: rule.exclude_package_names.clone().unwrap_or_default(),
            exclude_patterns: compile_patterns(
                rule.exclude_package_patterns.as_deref().unwrap_or_default(),
                false,
            )?,
        })
    }

    /// Decide whether the rule applies to the given dependency name
    ///
    /// Inclusion is checked first: a wildcard rule includes everything,
    /// otherwise an exact name or any pattern match includes. Matching is
    /// unanchored, so a pattern matches anywhere in the name. Exclusion is
    /// checked last and always dominates.
    pub fn applies(&self, dep_name: &str) -> bool {
        let included = self.wildcard
            || self.include_names.iter().any(|name| name == dep_name)
            || self.include_patterns.iter().any(|re| re.is_match(dep_name));
        if !included {
            return false;
        }
        let excluded = self.exclude_names.iter().any(|name| name == dep_name)
            || self.exclude_patterns.iter().any(|re| re.is_match(dep_name));
        !excluded
    }
}

fn compile_patterns(patterns: &[String], normalize_wildcards: bool) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            let expr = if normalize_wildcards && WILDCARD_PATTERNS.contains(&pattern.as_str()) {
                ".*"
            } else {
                pattern.as_str()
            };
            Regex::new(expr).map_err(|source| Error::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}
