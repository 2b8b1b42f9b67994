//! Scope runs over the non-npm manifest kinds

use std::sync::Arc;

use async_trait::async_trait;
use dep_config::ScopeConfig;
use dep_core::{UpdateEngine, UpdateType, Upgrade, UpgradeWorker, WorkerError};
use dep_extract::{Dependency, ManifestKind};

const DOCKERFILE: &str = include_str!("../../../test-fixtures/manifests/Dockerfile");
const TRAVIS_YML: &str = include_str!("../../../test-fixtures/manifests/travis.yml");
const WORKSPACE: &str = include_str!("../../../test-fixtures/manifests/WORKSPACE");
const PACKAGE_JS: &str = include_str!("../../../test-fixtures/manifests/package.js");

fn config(value: serde_json::Value) -> ScopeConfig {
    serde_json::from_value(value).unwrap()
}

/// Echoes one no-op upgrade per dependency so tests can see what ran
struct Echo;

#[async_trait]
impl UpgradeWorker for Echo {
    async fn find_upgrades(&self, config: &ScopeConfig) -> Result<Vec<Upgrade>, WorkerError> {
        Ok(vec![Upgrade {
            dep_name: config.dep_name().unwrap_or_default().to_string(),
            dep_type: config.dep_type().map(str::to_string),
            current_value: config.current_value().unwrap_or_default().to_string(),
            new_value: config.current_value().unwrap_or_default().to_string(),
            update_type: UpdateType::Pin,
        }])
    }
}

#[tokio::test]
async fn dockerfile_scope_yields_base_images() {
    let engine = UpdateEngine::new(Arc::new(Echo));
    let upgrades = engine
        .run_scope(DOCKERFILE, &config(serde_json::json!({"packageFile": "Dockerfile"})))
        .await
        .unwrap();
    let names: Vec<_> = upgrades.iter().map(|u| u.dep_name.as_str()).collect();
    assert_eq!(names, ["node", "nginx"]);
    assert_eq!(upgrades[0].current_value, "8.9.4");
}

#[tokio::test]
async fn travis_scope_yields_node_runtimes() {
    let engine = UpdateEngine::new(Arc::new(Echo));
    let upgrades = engine
        .run_scope(TRAVIS_YML, &config(serde_json::json!({"packageFile": ".travis.yml"})))
        .await
        .unwrap();
    assert_eq!(upgrades.len(), 2);
    assert!(upgrades.iter().all(|u| u.dep_name == "node"));
    let versions: Vec<_> = upgrades.iter().map(|u| u.current_value.as_str()).collect();
    assert_eq!(versions, ["6", "8"]);
}

#[tokio::test]
async fn workspace_scope_yields_pinned_repositories() {
    let engine = UpdateEngine::new(Arc::new(Echo));
    let upgrades = engine
        .run_scope(WORKSPACE, &config(serde_json::json!({"packageFile": "WORKSPACE"})))
        .await
        .unwrap();
    let names: Vec<_> = upgrades.iter().map(|u| u.dep_name.as_str()).collect();
    assert_eq!(names, ["io_bazel_rules_go", "com_github_google_protobuf"]);
}

#[tokio::test]
async fn meteor_scope_yields_npm_depends_entries() {
    let engine = UpdateEngine::new(Arc::new(Echo));
    let upgrades = engine
        .run_scope(PACKAGE_JS, &config(serde_json::json!({"packageFile": "package.js"})))
        .await
        .unwrap();
    let names: Vec<_> = upgrades.iter().map(|u| u.dep_name.as_str()).collect();
    assert_eq!(names, ["connect", "body-parser"]);
}

#[test]
fn fixture_manifests_round_trip_through_kind_detection() {
    // The fixture names map to the kinds the engine will pick at runtime
    for (name, kind) in [
        ("package.json", ManifestKind::Npm),
        ("package.js", ManifestKind::Meteor),
        ("Dockerfile", ManifestKind::Docker),
        (".travis.yml", ManifestKind::TravisNode),
        ("WORKSPACE", ManifestKind::Bazel),
    ] {
        assert_eq!(ManifestKind::from_file_name(name), Some(kind));
    }
}

#[test]
fn extracted_dependencies_seed_their_config_fields() {
    let dep = Dependency::new("nginx", "1.13.8").with_dep_type("image");
    let fields = dep.config_fields();
    assert_eq!(fields["depName"], "nginx");
    assert_eq!(fields["currentValue"], "1.13.8");
    assert_eq!(fields["depType"], "image");
}
