//! Bazel WORKSPACE dependency extraction

use std::sync::LazyLock;

use regex::Regex;

use crate::types::Dependency;

static GIT_REPOSITORY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"git_repository\(([^)]*)\)").unwrap());

/// Extract pinned repositories from `git_repository` stanzas
///
/// A stanza needs a `name` and either a `tag` or a `commit` to be an
/// updatable dependency; anything else (e.g. branch-tracking repositories)
/// is skipped.
pub fn extract_dependencies(content: &str) -> Vec<Dependency> {
    GIT_REPOSITORY
        .captures_iter(content)
        .filter_map(|captures| {
            let body = captures.get(1)?.as_str();
            let name = attribute(body, "name")?;
            let value = attribute(body, "tag").or_else(|| attribute(body, "commit"))?;
            Some(Dependency::new(name, value).with_dep_type("git_repository"))
        })
        .collect()
}

fn attribute(body: &str, key: &str) -> Option<String> {
    body.lines().find_map(|line| {
        let (attr, value) = line.split_once('=')?;
        if attr.trim() != key {
            return None;
        }
        Some(
            value
                .trim()
                .trim_end_matches(',')
                .trim_matches('"')
                .to_string(),
        )
    })
}
