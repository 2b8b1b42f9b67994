//! End-to-end pipeline test over the package.json fixture
//!
//! Exercises the complete flow: extraction -> monorepo/ignore filtering ->
//! per-dependency resolution -> concurrent worker fan-out -> flattening.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dep_config::ScopeConfig;
use dep_core::{UpdateEngine, UpdateType, Upgrade, UpgradeWorker, WorkerError};
use semver::Version;

const PACKAGE_JSON: &str = include_str!("../../../test-fixtures/manifests/package.json");
const SCOPE_CONFIG: &str = include_str!("../../../test-fixtures/configs/scope-config.json");

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Worker backed by a fixed in-memory "registry" of released versions
///
/// Proposes one upgrade to the newest known version when it is ahead of the
/// current value; records every config it is handed so tests can assert on
/// what resolution produced.
struct RegistryWorker {
    releases: HashMap<&'static str, &'static str>,
    seen: Mutex<Vec<ScopeConfig>>,
}

impl RegistryWorker {
    fn new() -> Self {
        let mut releases = HashMap::new();
        releases.insert("express", "4.16.2");
        releases.insert("lodash", "5.0.0");
        releases.insert("lodash.merge", "4.6.1");
        Self {
            releases,
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UpgradeWorker for RegistryWorker {
    async fn find_upgrades(&self, config: &ScopeConfig) -> Result<Vec<Upgrade>, WorkerError> {
        self.seen.lock().unwrap().push(config.clone());
        let dep_name = config.dep_name().unwrap_or_default().to_string();
        let current_value = config.current_value().unwrap_or_default().to_string();
        let Some(newest) = self.releases.get(dep_name.as_str()) else {
            return Ok(Vec::new());
        };
        let current = Version::parse(&current_value)
            .map_err(|err| WorkerError::new(&dep_name, err.to_string()))?;
        let newest = Version::parse(newest)
            .map_err(|err| WorkerError::new(&dep_name, err.to_string()))?;
        if newest <= current {
            return Ok(Vec::new());
        }
        Ok(vec![Upgrade {
            dep_name,
            dep_type: config.dep_type().map(str::to_string),
            current_value,
            new_value: newest.to_string(),
            update_type: UpdateType::between(&current, &newest),
        }])
    }
}

#[tokio::test]
async fn full_pipeline_over_the_fixture_manifest() {
    init_logging();
    let worker = Arc::new(RegistryWorker::new());
    let engine = UpdateEngine::new(Arc::clone(&worker) as Arc<dyn UpgradeWorker>);
    let config = ScopeConfig::from_json_str(SCOPE_CONFIG).unwrap();

    let upgrades = engine.run_scope(PACKAGE_JSON, &config).await.unwrap();

    // left-pad is ignored, internal-ui is monorepo-internal, and the
    // registry has nothing newer for the rest except these two.
    let names: Vec<_> = upgrades.iter().map(|u| u.dep_name.as_str()).collect();
    assert_eq!(names, ["express", "lodash", "lodash.merge"]);

    let lodash = &upgrades[1];
    assert_eq!(lodash.current_value, "4.17.0");
    assert_eq!(lodash.new_value, "5.0.0");
    assert_eq!(lodash.update_type, UpdateType::Major);

    let merge = &upgrades[2];
    assert_eq!(merge.update_type, UpdateType::Patch);

    // The workers saw exactly the filtered dependency set, in input order
    let seen = worker.seen.lock().unwrap();
    let seen_names: Vec<_> = seen
        .iter()
        .map(|cfg| cfg.dep_name().unwrap().to_string())
        .collect();
    assert_eq!(seen_names, ["express", "lodash", "lodash.merge"]);

    // Rule 1 matched lodash but not lodash.merge (exclusion wins)
    let by_name: HashMap<_, _> = seen
        .iter()
        .map(|cfg| (cfg.dep_name().unwrap().to_string(), cfg))
        .collect();
    assert_eq!(
        by_name["lodash"].get("groupName"),
        Some(&serde_json::json!("lodash packages"))
    );
    assert!(by_name["lodash.merge"].get("groupName").is_none());

    // Rule 2 matched express only
    assert_eq!(
        by_name["express"].get("schedule"),
        Some(&serde_json::json!("before 5am on monday"))
    );
    assert!(by_name["lodash"].get("schedule").is_none());

    // Rule predicates and scope bookkeeping never reach a worker
    for cfg in seen.iter() {
        for field in [
            "packageNames",
            "packagePatterns",
            "excludePackageNames",
            "excludePackagePatterns",
            "packageRules",
            "ignoreDeps",
            "monorepoPackages",
            "packageFile",
        ] {
            assert!(cfg.get(field).is_none(), "{field} leaked to a worker");
        }
    }
}

#[tokio::test]
async fn disabled_scope_short_circuits_the_pipeline() {
    init_logging();
    let worker = Arc::new(RegistryWorker::new());
    let engine = UpdateEngine::new(Arc::clone(&worker) as Arc<dyn UpgradeWorker>);
    let mut config = ScopeConfig::from_json_str(SCOPE_CONFIG).unwrap();
    config.insert("enabled", serde_json::json!(false));

    let upgrades = engine.run_scope(PACKAGE_JSON, &config).await.unwrap();

    assert!(upgrades.is_empty());
    assert!(worker.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn dev_dependencies_scope_reads_its_own_section() {
    init_logging();
    let worker = Arc::new(RegistryWorker::new());
    let engine = UpdateEngine::new(Arc::clone(&worker) as Arc<dyn UpgradeWorker>);
    let mut config = ScopeConfig::from_json_str(SCOPE_CONFIG).unwrap();
    config.insert("depType", serde_json::json!("devDependencies"));

    engine.run_scope(PACKAGE_JSON, &config).await.unwrap();

    let seen = worker.seen.lock().unwrap();
    let seen_names: Vec<_> = seen
        .iter()
        .map(|cfg| cfg.dep_name().unwrap().to_string())
        .collect();
    assert_eq!(seen_names, ["eslint", "webpack"]);
    assert!(
        seen.iter()
            .all(|cfg| cfg.dep_type() == Some("devDependencies"))
    );
}
