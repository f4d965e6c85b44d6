//! AI Orbit Core Library
//!
//! Shared functionality for the AI Orbit tool governance dashboard:
//! - Domain models for tools, goals and decisions
//! - Read-only loader for the dashboard's JSON data document
//! - Rule-based insight engine with a pluggable analyzer list
//! - Tool-goal recommendation catalog
//! - TOML configuration for rule thresholds
//! - Analytics summary for dashboard figures

pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
pub mod snapshot;

/// Test utilities: builders for tools, goals and decisions
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use analytics::AnalyticsSummary;
pub use catalog::{RecommendationTable, ToolRecommendation};
pub use config::{ConfigSource, EngineConfig, Thresholds};
pub use error::{Error, Result};
pub use insights::{
    generate_insights, Analyzer, AnalyzerKind, Insight, InsightCategory, InsightEngine,
    InsightType,
};
pub use models::{Decision, Goal, Tool};
pub use snapshot::Snapshot;
