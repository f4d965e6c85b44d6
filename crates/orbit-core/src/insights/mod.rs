//! Insight Engine - Rule-Based Advisory Findings
//!
//! The Insight Engine scans a user's tools, goals and decisions and surfaces
//! what is interesting, wasteful or worth acting on. It is a pure function of
//! its inputs: no I/O, no shared state, identical input gives identical
//! output (ids included).
//!
//! ## Analyzers (evaluation order)
//!
//! - **Spending** - High monthly spend, no free-tier tools
//! - **Tool Overlap** - Several tools in one category
//! - **Tool Status** - Paused and trial tools
//! - **Goals** - Stuck, unlinked and completed goals
//! - **Decisions** - Pending reviews, best-correlated tool, negative streaks
//! - **Recommendations** - Tool categories missing for active goals
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orbit_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let insights = engine.generate(&tools, &goals, &decisions);
//! ```

pub mod decisions;
pub mod engine;
pub mod goals;
pub mod recommendations;
pub mod spending;
pub mod tool_usage;
pub mod types;

pub use decisions::DecisionAnalyzer;
pub use engine::{AnalysisContext, Analyzer, InsightEngine, WELCOME_INSIGHT_ID};
pub use goals::GoalAnalyzer;
pub use recommendations::RecommendationAnalyzer;
pub use spending::SpendingAnalyzer;
pub use tool_usage::{ToolOverlapAnalyzer, ToolStatusAnalyzer};
pub use types::{AnalyzerKind, Insight, InsightCategory, InsightType};

use std::sync::OnceLock;

use crate::models::{Decision, Goal, Tool};

/// Run the default engine over the given collections
pub fn generate_insights(tools: &[Tool], goals: &[Goal], decisions: &[Decision]) -> Vec<Insight> {
    static DEFAULT_ENGINE: OnceLock<InsightEngine> = OnceLock::new();
    DEFAULT_ENGINE
        .get_or_init(InsightEngine::new)
        .generate(tools, goals, decisions)
}
