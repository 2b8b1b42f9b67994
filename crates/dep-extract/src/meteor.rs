//! Meteor package.js dependency extraction

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Dependency;

static NPM_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]([^'"]+)['"]\s*:\s*['"]([^'"]+)['"]"#).unwrap());

/// Extract npm dependencies declared via `Npm.depends({...})`
///
/// A package.js without an `Npm.depends` call has no npm dependencies.
pub fn extract_dependencies(content: &str) -> Vec<Dependency> {
    let Some(start) = content.find("Npm.depends(") else {
        return Vec::new();
    };
    let block = &content[start..];
    let (Some(open), Some(close)) = (block.find('{'), block.find('}')) else {
        return Vec::new();
    };
    if close < open {
        return Vec::new();
    }
    NPM_ENTRY
        .captures_iter(&block[open..=close])
        .map(|captures| {
            Dependency::new(&captures[1], &captures[2]).with_dep_type("npmDepends")
        })
        .collect()
}
