//! .travis.yml language-runtime extraction

use serde_yaml::Value;

use crate::types::Dependency;
use crate::{Error, Result};

/// Extract node runtime versions from a .travis.yml
///
/// Each entry of the `node_js` list yields one `node` dependency. A single
/// scalar (`node_js: "8"`) is accepted as a one-element list.
///
/// # Errors
///
/// Content that is not valid YAML, or a `node_js` key with a non-version
/// shape, is an extraction error.
pub fn extract_dependencies(content: &str) -> Result<Vec<Dependency>> {
    let doc: Value = serde_yaml::from_str(content)?;
    let Some(node_js) = doc.get("node_js") else {
        return Ok(Vec::new());
    };
    let versions = match node_js {
        Value::String(version) => vec![version.clone()],
        Value::Number(version) => vec![version.to_string()],
        Value::Sequence(entries) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(version) => Ok(version.clone()),
                Value::Number(version) => Ok(version.to_string()),
                _ => Err(Error::malformed(
                    ".travis.yml",
                    "node_js entries must be strings or numbers",
                )),
            })
            .collect::<Result<Vec<_>>>()?,
        _ => {
            return Err(Error::malformed(
                ".travis.yml",
                "node_js must be a version or list of versions",
            ));
        }
    };
    Ok(versions
        .into_iter()
        .map(|version| Dependency::new("node", version).with_dep_type("language"))
        .collect())
}
