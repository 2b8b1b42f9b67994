//! Dependency references shared by all extractors

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One dependency reference extracted from manifest content
///
/// `dep_name` is the join key for rule matching and the ignore/monorepo
/// filters downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Name used for rule matching and filtering
    pub dep_name: String,

    /// Version, range, tag, or commit as written in the manifest
    pub current_value: String,

    /// Manifest section or kind-specific slot the dependency came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dep_type: Option<String>,
}

impl Dependency {
    pub fn new(dep_name: impl Into<String>, current_value: impl Into<String>) -> Self {
        Self {
            dep_name: dep_name.into(),
            current_value: current_value.into(),
            dep_type: None,
        }
    }

    pub fn with_dep_type(mut self, dep_type: impl Into<String>) -> Self {
        self.dep_type = Some(dep_type.into());
        self
    }

    /// Project the dependency to config fields for seeding its scope config
    pub fn config_fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("depName".to_string(), Value::String(self.dep_name.clone()));
        fields.insert(
            "currentValue".to_string(),
            Value::String(self.current_value.clone()),
        );
        if let Some(dep_type) = &self.dep_type {
            fields.insert("depType".to_string(), Value::String(dep_type.clone()));
        }
        fields
    }
}
