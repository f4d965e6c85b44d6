//! Insight Engine - runs the analyzers in order and assembles the result

use std::collections::HashSet;

use crate::catalog::RecommendationTable;
use crate::config::{EngineConfig, Thresholds};
use crate::models::{Decision, Goal, Tool};

use super::types::{AnalyzerKind, Insight, InsightCategory, InsightType};
use super::{
    DecisionAnalyzer, GoalAnalyzer, RecommendationAnalyzer, SpendingAnalyzer, ToolOverlapAnalyzer,
    ToolStatusAnalyzer,
};

/// Id of the insight returned when nothing else fires
pub const WELCOME_INSIGHT_ID: &str = "welcome";

/// Context provided to analyzers
pub struct AnalysisContext<'a> {
    pub tools: &'a [Tool],
    pub goals: &'a [Goal],
    pub decisions: &'a [Decision],
    pub thresholds: &'a Thresholds,
    pub recommendations: &'a RecommendationTable,
}

impl<'a> AnalysisContext<'a> {
    /// Look up a tool by id, ignoring dangling references
    pub fn tool(&self, id: &str) -> Option<&'a Tool> {
        self.tools.iter().find(|t| t.id == id)
    }
}

/// A single family of rules
pub trait Analyzer: Send + Sync {
    fn kind(&self) -> AnalyzerKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce findings in input order; must not mutate or fail
    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight>;
}

/// The main insight engine
pub struct InsightEngine {
    analyzers: Vec<Box<dyn Analyzer>>,
    config: EngineConfig,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in analyzers and default config
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with the built-in analyzers and a custom config
    pub fn with_config(config: EngineConfig) -> Self {
        let mut engine = Self {
            analyzers: vec![],
            config,
        };

        // Registration order is evaluation order
        engine.register(Box::new(SpendingAnalyzer::new()));
        engine.register(Box::new(ToolOverlapAnalyzer::new()));
        engine.register(Box::new(ToolStatusAnalyzer::new()));
        engine.register(Box::new(GoalAnalyzer::new()));
        engine.register(Box::new(DecisionAnalyzer::new()));
        engine.register(Box::new(RecommendationAnalyzer::new()));

        engine
    }

    /// Append an analyzer to the end of the run order
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.push(analyzer);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run every analyzer and return the findings, never empty
    pub fn generate(&self, tools: &[Tool], goals: &[Goal], decisions: &[Decision]) -> Vec<Insight> {
        let ctx = AnalysisContext {
            tools,
            goals,
            decisions,
            thresholds: &self.config.thresholds,
            recommendations: &self.config.recommendations,
        };

        let mut seen = HashSet::new();
        let mut insights = Vec::new();

        for analyzer in &self.analyzers {
            let findings = analyzer.analyze(&ctx);
            tracing::debug!(
                analyzer = analyzer.name(),
                kind = analyzer.kind().as_str(),
                count = findings.len(),
                "Analyzer complete"
            );
            for insight in findings {
                if seen.insert(insight.id.clone()) {
                    insights.push(insight);
                } else {
                    tracing::debug!(id = %insight.id, "Dropping duplicate insight");
                }
            }
        }

        if insights.is_empty() {
            tracing::debug!("No analyzer fired, returning welcome insight");
            insights.push(welcome_insight());
        }

        insights
    }

    /// Kinds of the registered analyzers, in run order
    pub fn analyzer_kinds(&self) -> Vec<AnalyzerKind> {
        self.analyzers.iter().map(|a| a.kind()).collect()
    }
}

fn welcome_insight() -> Insight {
    Insight::new(
        WELCOME_INSIGHT_ID,
        InsightType::Info,
        InsightCategory::Tools,
        "Add more data to unlock insights",
        "Register tools, set goals, and log decisions. AI Orbit will analyze patterns and surface recommendations.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ToolCategory, ToolStatus};
    use crate::test_utils::tool;

    struct FixedAnalyzer(Vec<Insight>);

    impl Analyzer for FixedAnalyzer {
        fn kind(&self) -> AnalyzerKind {
            AnalyzerKind::Recommendations
        }

        fn name(&self) -> &'static str {
            "Fixed"
        }

        fn analyze(&self, _ctx: &AnalysisContext<'_>) -> Vec<Insight> {
            self.0.clone()
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.analyzer_kinds(),
            vec![
                AnalyzerKind::Spending,
                AnalyzerKind::ToolOverlap,
                AnalyzerKind::ToolStatus,
                AnalyzerKind::Goals,
                AnalyzerKind::Decisions,
                AnalyzerKind::Recommendations,
            ]
        );
    }

    #[test]
    fn test_empty_input_returns_welcome() {
        let engine = InsightEngine::new();
        let insights = engine.generate(&[], &[], &[]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].id, WELCOME_INSIGHT_ID);
        assert_eq!(insights[0].insight_type, InsightType::Info);
        assert_eq!(insights[0].category, InsightCategory::Tools);
    }

    #[test]
    fn test_builtin_analyzers_have_distinct_names() {
        let engine = InsightEngine::new();
        let mut names: Vec<&str> = engine.analyzers.iter().map(|a| a.name()).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), engine.analyzers.len());
    }

    #[test]
    fn test_empty_input_with_lowest_thresholds_returns_welcome() {
        let config = EngineConfig::from_toml_str(
            r#"
            [thresholds]
            high_spend_monthly = 0.0
            overlap_min_tools = 1
            pending_decisions_min = 1
            correlation_min_decisions = 1
            negative_decisions_min = 1
            "#,
        )
        .unwrap();
        let insights = InsightEngine::with_config(config).generate(&[], &[], &[]);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].id, WELCOME_INSIGHT_ID);
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut engine = InsightEngine::new();
        let first = Insight::new(
            "dup",
            InsightType::Tip,
            InsightCategory::Recommendation,
            "first",
            "",
        );
        let second = Insight::new(
            "dup",
            InsightType::Tip,
            InsightCategory::Recommendation,
            "second",
            "",
        );
        engine.register(Box::new(FixedAnalyzer(vec![first, second])));

        let insights = engine.generate(&[], &[], &[]);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "first");
    }

    #[test]
    fn test_engine_does_not_mutate_inputs() {
        let tools = vec![
            tool("a", "Alpha", ToolCategory::Code, 60.0, ToolStatus::Active),
            tool("b", "Beta", ToolCategory::Code, 60.0, ToolStatus::Paused),
        ];
        let before = format!("{:?}", tools);
        let _ = InsightEngine::new().generate(&tools, &[], &[]);
        assert_eq!(format!("{:?}", tools), before);
    }
}
