//! package.json dependency extraction

use serde_json::Value;
use tracing::trace;

use crate::types::Dependency;
use crate::{Error, Result};

/// Manifest section read when no depType is given
const DEFAULT_SECTION: &str = "dependencies";

/// Extract dependencies from one section of a package.json
///
/// Entries come back in declaration order. A missing section yields an
/// empty list. Non-string version values (git URLs written as objects,
/// workspace protocols, etc.) keep the entry with an empty value so the
/// filters downstream still see the name.
///
/// # Errors
///
/// Content that is not valid JSON, or whose top level is not an object, is
/// an extraction error.
pub fn extract_dependencies(content: &str, dep_type: Option<&str>) -> Result<Vec<Dependency>> {
    let manifest: Value = serde_json::from_str(content)?;
    let Some(root) = manifest.as_object() else {
        return Err(Error::malformed(
            "package.json",
            "top level is not an object",
        ));
    };
    let section = dep_type.unwrap_or(DEFAULT_SECTION);
    let Some(entries) = root.get(section).and_then(Value::as_object) else {
        trace!(section, "manifest has no such dependency section");
        return Ok(Vec::new());
    };
    Ok(entries
        .iter()
        .map(|(name, version)| {
            Dependency::new(name, version.as_str().unwrap_or_default())
                .with_dep_type(section)
        })
        .collect())
}
