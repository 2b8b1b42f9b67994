//! Dockerfile base-image extraction

use crate::types::Dependency;

/// Extract base images from `FROM` instructions
///
/// Every build stage contributes one dependency. Flags (`--platform=...`)
/// and stage aliases (`AS builder`) are skipped, `scratch` is not a real
/// image, and a missing tag is recorded as `latest`.
pub fn extract_dependencies(content: &str) -> Vec<Dependency> {
    content
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            if !tokens.next()?.eq_ignore_ascii_case("FROM") {
                return None;
            }
            let image = tokens.find(|token| !token.starts_with("--"))?;
            if image.eq_ignore_ascii_case("scratch") {
                return None;
            }
            let (name, tag) = match image.rsplit_once(':') {
                // A ':' inside a registry host:port is not a tag separator
                Some((name, tag)) if !tag.contains('/') => (name, tag),
                _ => (image, "latest"),
            };
            Some(Dependency::new(name, tag).with_dep_type("image"))
        })
        .collect()
}
