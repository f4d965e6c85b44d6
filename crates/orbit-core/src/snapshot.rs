//! Read-only view of the dashboard's JSON data document
//!
//! The storage layer keeps every collection in one JSON file
//! (`{ "tools": [...], "goals": [...], "decisions": [...], ... }`). This module
//! only reads it; collections the engine does not use are ignored and
//! missing ones come back empty.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Decision, Goal, Tool};

/// Default location of the data document, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/db.json";

/// Full-collection snapshot of tools, goals and decisions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub decisions: Vec<Decision>,
}

/// Collection sizes, for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotCounts {
    pub tools: usize,
    pub goals: usize,
    pub decisions: usize,
}

impl Snapshot {
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_PATH)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a snapshot, failing if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::NotFound(format!("data file {}", path.display())));
        }
        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content).map_err(|e| {
            Error::InvalidData(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(
            path = %path.display(),
            tools = snapshot.tools.len(),
            goals = snapshot.goals.len(),
            decisions = snapshot.decisions.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Load a snapshot, treating a missing file as empty collections
    pub fn load_or_empty(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::NotFound(_)) => {
                tracing::warn!(path = %path.display(), "Data file not found, using empty snapshot");
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            tools: self.tools.len(),
            goals: self.goals.len(),
            decisions: self.decisions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty() && self.goals.is_empty() && self.decisions.is_empty()
    }
}
