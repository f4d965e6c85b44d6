//! Insight engine configuration
//!
//! Holds the rule thresholds and the recommendation table the engine runs
//! with.
//!
//! ## Configuration Resolution
//!
//! 1. Explicit path (must exist)
//! 2. Override in data dir (~/.local/share/aiorbit/config/insights.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{RecommendationTable, ToolRecommendation};
use crate::error::{Error, Result};
use crate::models::{GoalCategory, ToolCategory};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/insights.toml");

/// Rule thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Combined monthly spend that triggers a warning (strict >)
    pub high_spend_monthly: f64,
    /// Tools per category before flagging overlap
    pub overlap_min_tools: usize,
    /// Upper (exclusive) progress bound for stuck goals
    pub stuck_progress_below: u8,
    pub pending_decisions_min: usize,
    /// Total decisions required before correlating tools with outcomes
    pub correlation_min_decisions: usize,
    pub negative_decisions_min: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            high_spend_monthly: 100.0,
            overlap_min_tools: 3,
            stuck_progress_below: 50,
            pending_decisions_min: 3,
            correlation_min_decisions: 3,
            negative_decisions_min: 2,
        }
    }
}

/// Where the active config came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Full engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub thresholds: Thresholds,
    pub recommendations: RecommendationTable,
    source: ConfigSource,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            recommendations: RecommendationTable::builtin().clone(),
            source: ConfigSource::Embedded,
        }
    }
}

impl EngineConfig {
    /// Load config, preferring `path`, then the data-dir override, then the embedded default
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "config file {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.exists() => Self::from_file(&default_path),
            _ => Self::from_toml_str(DEFAULT_CONFIG),
        }
    }

    /// Parse config from a file on disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::from_toml_str(&content)?;
        config.source = ConfigSource::File(path.to_path_buf());
        tracing::info!(path = %path.display(), "Loaded insight config override");
        Ok(config)
    }

    /// Parse config from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(t) = raw.thresholds {
            let thresholds = &mut config.thresholds;
            if let Some(v) = t.high_spend_monthly {
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::Config(format!(
                        "high_spend_monthly must be a non-negative number, got {}",
                        v
                    )));
                }
                thresholds.high_spend_monthly = v;
            }
            if let Some(v) = t.overlap_min_tools {
                thresholds.overlap_min_tools = at_least_one("overlap_min_tools", v)?;
            }
            if let Some(v) = t.stuck_progress_below {
                if v > 100 {
                    return Err(Error::Config(format!(
                        "stuck_progress_below must be within 0-100, got {}",
                        v
                    )));
                }
                thresholds.stuck_progress_below = v;
            }
            if let Some(v) = t.pending_decisions_min {
                thresholds.pending_decisions_min = at_least_one("pending_decisions_min", v)?;
            }
            if let Some(v) = t.correlation_min_decisions {
                thresholds.correlation_min_decisions =
                    at_least_one("correlation_min_decisions", v)?;
            }
            if let Some(v) = t.negative_decisions_min {
                thresholds.negative_decisions_min = at_least_one("negative_decisions_min", v)?;
            }
        }

        if let Some(entries) = raw.recommendations {
            let entries = entries
                .into_iter()
                .map(RawRecommendation::into_recommendation)
                .collect::<Result<Vec<_>>>()?;
            config.recommendations = RecommendationTable::new(entries);
        }

        Ok(config)
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }
}

/// Reject zero for count thresholds
fn at_least_one(key: &str, value: usize) -> Result<usize> {
    if value == 0 {
        return Err(Error::Config(format!("{} must be at least 1", key)));
    }
    Ok(value)
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("aiorbit").join("config").join("insights.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    thresholds: Option<RawThresholds>,
    recommendations: Option<Vec<RawRecommendation>>,
}

#[derive(Debug, Deserialize)]
struct RawThresholds {
    high_spend_monthly: Option<f64>,
    overlap_min_tools: Option<usize>,
    stuck_progress_below: Option<u8>,
    pending_decisions_min: Option<usize>,
    correlation_min_decisions: Option<usize>,
    negative_decisions_min: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    goal_category: String,
    tool_category: String,
    description: String,
    examples: Vec<String>,
}

impl RawRecommendation {
    fn into_recommendation(self) -> Result<ToolRecommendation> {
        let goal_category: GoalCategory = self.goal_category.parse().map_err(Error::Config)?;
        let tool_category: ToolCategory = self.tool_category.parse().map_err(Error::Config)?;
        if self.examples.is_empty() {
            return Err(Error::Config(format!(
                "recommendation {} -> {} needs at least one example",
                goal_category, tool_category
            )));
        }
        Ok(ToolRecommendation {
            goal_category,
            tool_category,
            description: self.description,
            examples: self.examples,
        })
    }
}
