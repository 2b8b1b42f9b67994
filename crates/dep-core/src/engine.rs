//! Per-manifest-scope orchestration
//!
//! One scope is one (manifest content, scope config) unit. The engine
//! extracts, filters, resolves a config per dependency, fans the upgrade
//! lookups out concurrently, and flattens the results.

use std::sync::Arc;

use tracing::{debug, trace};

use dep_config::{ScopeConfig, resolve_dep_config};
use dep_extract::{Dependency, ManifestKind};

use crate::context::RunContext;
use crate::worker::{Upgrade, UpgradeWorker};
use crate::{Error, Result};

/// Runs the update pipeline for one manifest scope at a time
///
/// Scopes are independent: a failure in one `run_scope` call does not
/// affect other calls on the same engine.
pub struct UpdateEngine {
    worker: Arc<dyn UpgradeWorker>,
}

impl UpdateEngine {
    pub fn new(worker: Arc<dyn UpgradeWorker>) -> Self {
        Self { worker }
    }

    /// Process one manifest scope and return its flattened upgrade list
    ///
    /// Extraction, filtering, and resolution run synchronously in input
    /// order. The per-dependency worker invocations are spawned together
    /// and awaited in input order, so the combined list is deterministic
    /// regardless of completion order. The first worker failure fails the
    /// whole scope; no partial upgrade list is returned.
    ///
    /// # Errors
    ///
    /// Fails on a malformed manifest, a broken package rule, or any worker
    /// failure. A disabled scope and an unrecognized manifest name are not
    /// errors; both yield an empty list.
    pub async fn run_scope(&self, content: &str, config: &ScopeConfig) -> Result<Vec<Upgrade>> {
        let ctx = RunContext::from_config(config);
        if !config.enabled() {
            debug!(?ctx, "scope is disabled");
            return Ok(Vec::new());
        }

        let deps = extract_deps(content, config, &ctx)?;
        let deps = filter_deps(deps, config);
        debug!(?ctx, dep_count = deps.len(), "dependencies after filtering");

        // Resolve every config before spawning anything, so a configuration
        // error aborts the scope without a single worker call.
        let mut resolved = Vec::with_capacity(deps.len());
        for dep in &deps {
            let dep_fields = ScopeConfig::from(dep.config_fields());
            resolved.push(resolve_dep_config(config, &dep_fields)?);
        }

        // Fan out one task per dependency; await in input order.
        let handles: Vec<_> = resolved
            .into_iter()
            .map(|dep_config| {
                let worker = Arc::clone(&self.worker);
                tokio::spawn(async move { worker.find_upgrades(&dep_config).await })
            })
            .collect();

        let mut upgrades = Vec::new();
        for (dep, handle) in deps.iter().zip(handles) {
            let outcome = handle.await.map_err(|source| Error::WorkerJoin {
                dep_name: dep.dep_name.clone(),
                source,
            })?;
            upgrades.extend(outcome?);
        }
        trace!(?ctx, upgrade_count = upgrades.len(), "combined upgrades");
        Ok(upgrades)
    }
}

fn extract_deps(content: &str, config: &ScopeConfig, ctx: &RunContext) -> Result<Vec<Dependency>> {
    let Some(file_name) = config.package_file() else {
        debug!(?ctx, "scope has no packageFile");
        return Ok(Vec::new());
    };
    let Some(kind) = ManifestKind::from_file_name(file_name) else {
        debug!(?ctx, file_name, "unrecognized manifest kind");
        return Ok(Vec::new());
    };
    let deps = kind.extract(content, config.dep_type())?;
    debug!(?ctx, ?kind, dep_count = deps.len(), "extracted dependencies");
    Ok(deps)
}

/// Drop monorepo-internal and ignored dependencies, preserving input order
fn filter_deps(mut deps: Vec<Dependency>, config: &ScopeConfig) -> Vec<Dependency> {
    if config.has_monorepo_flags() {
        let internal = config.monorepo_packages();
        deps.retain(|dep| !internal.contains(&dep.dep_name.as_str()));
    }
    let ignored = config.ignore_deps();
    deps.retain(|dep| !ignored.contains(&dep.dep_name.as_str()));
    deps
}
