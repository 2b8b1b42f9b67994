//! Scope configuration model and merging
//!
//! A `ScopeConfig` is the configuration active at one level of the scope
//! hierarchy (global -> manifest -> dep type -> package). Package rules may
//! override any option field, so the config is kept as an ordered JSON
//! object, with typed accessors for the fields the engine interprets itself.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rule::PackageRule;
use crate::{Error, Result};

/// Fields that mark a manifest scope as part of a monorepo workspace
const MONOREPO_FLAGS: [&str; 3] = ["lerna", "workspaces", "workspaceDir"];

/// Configuration active at one scope level
///
/// Merging is shallow: a child field replaces the parent's field wholesale.
/// The one exception is `packageRules`, which concatenates so that narrower
/// scopes append to inherited rules instead of discarding them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeConfig(Map<String, Value>);

impl ScopeConfig {
    /// Create an empty config
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Parse a config from a JSON object string
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Get a raw field value by option name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set a field, replacing any existing value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether processing is enabled for this scope (default true)
    pub fn enabled(&self) -> bool {
        !matches!(self.0.get("enabled"), Some(Value::Bool(false)))
    }

    /// The dependency name, once a dependency has been merged in
    pub fn dep_name(&self) -> Option<&str> {
        self.get_str("depName")
    }

    /// The manifest file name driving extraction dispatch
    pub fn package_file(&self) -> Option<&str> {
        self.get_str("packageFile")
    }

    /// The manifest section being processed (e.g. `devDependencies`)
    pub fn dep_type(&self) -> Option<&str> {
        self.get_str("depType")
    }

    /// The repository this scope belongs to, for log correlation
    pub fn repository(&self) -> Option<&str> {
        self.get_str("repository")
    }

    /// The dependency's current version/range/tag, once merged in
    pub fn current_value(&self) -> Option<&str> {
        self.get_str("currentValue")
    }

    /// Dependency names dropped from the scope entirely
    pub fn ignore_deps(&self) -> Vec<&str> {
        self.string_list("ignoreDeps")
    }

    /// Workspace-internal package names, dropped when a monorepo flag is set
    pub fn monorepo_packages(&self) -> Vec<&str> {
        self.string_list("monorepoPackages")
    }

    /// True when any workspace/monorepo marker is set on this scope
    ///
    /// A flag counts as set when present and neither `null` nor `false`.
    pub fn has_monorepo_flags(&self) -> bool {
        MONOREPO_FLAGS.iter().any(|flag| {
            !matches!(
                self.0.get(*flag),
                None | Some(Value::Null) | Some(Value::Bool(false))
            )
        })
    }

    /// Parsed `packageRules` entries, declaration order preserved
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRule` when the field is not an array or an
    /// entry is not an object.
    pub fn package_rules(&self) -> Result<Vec<PackageRule>> {
        let Some(value) = self.0.get("packageRules") else {
            return Ok(Vec::new());
        };
        let Some(entries) = value.as_array() else {
            return Err(Error::InvalidRule {
                index: 0,
                message: "packageRules must be an array".to_string(),
            });
        };
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if !entry.is_object() {
                    return Err(Error::InvalidRule {
                        index,
                        message: "package rule must be an object".to_string(),
                    });
                }
                serde_json::from_value(entry.clone()).map_err(Error::from)
            })
            .collect()
    }

    /// Merge a child config onto this one, producing a new config
    ///
    /// Every field present in the child replaces the parent's value; fields
    /// absent from the child are preserved. There is no deep merge of nested
    /// objects. `packageRules` arrays concatenate, parent rules first.
    pub fn merge_child(&self, child: &ScopeConfig) -> ScopeConfig {
        let mut merged = self.0.clone();
        for (key, value) in &child.0 {
            if key == "packageRules"
                && let (Some(Value::Array(parent_rules)), Value::Array(child_rules)) =
                    (merged.get(key), value)
            {
                let mut combined = parent_rules.clone();
                combined.extend(child_rules.iter().cloned());
                merged.insert(key.clone(), Value::Array(combined));
                continue;
            }
            merged.insert(key.clone(), value.clone());
        }
        ScopeConfig(merged)
    }

    /// Keep only the fields accepted by `keep`, producing a new config
    pub fn project<F>(&self, keep: F) -> ScopeConfig
    where
        F: Fn(&str) -> bool,
    {
        ScopeConfig(
            self.0
                .iter()
                .filter(|(key, _)| keep(key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }

    /// Iterate over (field, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// String entries of an array-valued field; missing field means empty
    fn string_list(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Map<String, Value>> for ScopeConfig {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
