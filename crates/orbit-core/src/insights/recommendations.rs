//! Tool-Goal Recommendation Insight
//!
//! For each active goal, suggests tool categories from the recommendation
//! table that the user has no tool for yet.

use std::collections::HashSet;

use crate::models::ToolCategory;

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerKind, Insight, InsightCategory, InsightType};

pub struct RecommendationAnalyzer;

impl RecommendationAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RecommendationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for RecommendationAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Recommendations
    }

    fn name(&self) -> &'static str {
        "Tool-Goal Recommendations"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut findings = Vec::new();

        for goal in ctx.goals.iter().filter(|g| g.is_active()) {
            // Dangling ids are skipped
            let linked: HashSet<ToolCategory> = goal
                .linked_tool_ids
                .iter()
                .filter_map(|id| ctx.tool(id))
                .map(|t| t.category)
                .collect();

            for rec in ctx.recommendations.for_goal(goal.category) {
                let owned = ctx.tools.iter().any(|t| t.category == rec.tool_category);
                if owned || linked.contains(&rec.tool_category) {
                    continue;
                }

                let description = match rec.first_example() {
                    Some(example) => format!("{} Try: {}.", rec.description, example),
                    None => rec.description.clone(),
                };

                findings.push(Insight::new(
                    format!("rec-{}-{}", goal.id, rec.tool_category),
                    InsightType::Tip,
                    InsightCategory::Recommendation,
                    format!(
                        "Consider a {} tool for \"{}\"",
                        rec.tool_category, goal.title
                    ),
                    description,
                ));
            }
        }

        findings
    }
}
