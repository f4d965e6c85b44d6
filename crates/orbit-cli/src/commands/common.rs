//! Shared command utilities
//!
//! - `load_snapshot` - Read the data document (missing file is empty)
//! - `load_engine` - Resolve config and build the insight engine

use std::path::Path;

use anyhow::{Context, Result};
use orbit_core::{EngineConfig, InsightEngine, Snapshot};

pub fn load_snapshot(data_path: &Path) -> Result<Snapshot> {
    Snapshot::load_or_empty(data_path)
        .with_context(|| format!("Failed to load data from {}", data_path.display()))
}

pub fn load_engine(config_path: Option<&Path>) -> Result<InsightEngine> {
    let config = EngineConfig::load(config_path).context("Failed to load insight config")?;
    tracing::debug!(source = %config.source(), "Using insight config");
    Ok(InsightEngine::with_config(config))
}
