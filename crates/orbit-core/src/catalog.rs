//! Tool-goal recommendation catalog
//!
//! A fixed knowledge base mapping goal categories to the tool categories that
//! tend to help with them. The built-in table is assembled once per process
//! and shared read-only afterwards; a config file may supply a replacement
//! table (see [`crate::config`]).

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::{GoalCategory, ToolCategory};

/// One goal-category → tool-category recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecommendation {
    pub goal_category: GoalCategory,
    pub tool_category: ToolCategory,
    pub description: String,
    /// Concrete product suggestions, best first
    pub examples: Vec<String>,
}

impl ToolRecommendation {
    pub fn first_example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }
}

/// Ordered set of recommendations
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationTable {
    entries: Vec<ToolRecommendation>,
}

impl RecommendationTable {
    pub fn new(entries: Vec<ToolRecommendation>) -> Self {
        Self { entries }
    }

    /// The built-in table shipped with the engine
    pub fn builtin() -> &'static RecommendationTable {
        static BUILTIN_TABLE: OnceLock<RecommendationTable> = OnceLock::new();
        BUILTIN_TABLE.get_or_init(|| {
            Self::new(
                BUILTIN
                    .iter()
                    .map(|(goal, tool, description, examples)| ToolRecommendation {
                        goal_category: *goal,
                        tool_category: *tool,
                        description: description.to_string(),
                        examples: examples.iter().map(|e| e.to_string()).collect(),
                    })
                    .collect(),
            )
        })
    }

    pub fn entries(&self) -> &[ToolRecommendation] {
        &self.entries
    }

    /// Recommendations for a goal category, in table order
    pub fn for_goal(
        &self,
        category: GoalCategory,
    ) -> impl Iterator<Item = &ToolRecommendation> + '_ {
        self.entries
            .iter()
            .filter(move |rec| rec.goal_category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

type BuiltinEntry = (
    GoalCategory,
    ToolCategory,
    &'static str,
    &'static [&'static str],
);

const BUILTIN: &[BuiltinEntry] = &[
    (
        GoalCategory::Career,
        ToolCategory::Communication,
        "Communication AI tools help craft professional messages, prepare for interviews, and build your personal brand.",
        &[
            "ChatGPT for cover letters",
            "Grammarly for professional writing",
            "Otter.ai for meeting notes",
        ],
    ),
    (
        GoalCategory::Career,
        ToolCategory::Analytics,
        "Analytics tools help you track industry trends, analyze job markets, and make data-driven career decisions.",
        &[
            "LinkedIn AI features",
            "Crystal for personality insights",
            "Tableau for portfolio dashboards",
        ],
    ),
    (
        GoalCategory::Learning,
        ToolCategory::Research,
        "Research AI tools accelerate learning by summarizing papers, explaining concepts, and finding relevant resources.",
        &[
            "Perplexity for research",
            "Elicit for academic papers",
            "NotebookLM for study notes",
        ],
    ),
    (
        GoalCategory::Learning,
        ToolCategory::Code,
        "Code AI tools are essential for learning programming: they explain code, suggest fixes, and teach best practices.",
        &[
            "GitHub Copilot for coding",
            "Cursor for AI-first development",
            "Replit AI for quick experiments",
        ],
    ),
    (
        GoalCategory::Project,
        ToolCategory::Productivity,
        "Productivity AI tools help manage tasks, automate workflows, and keep projects on track with less manual effort.",
        &[
            "Notion AI for project docs",
            "Zapier for automation",
            "Linear for issue tracking",
        ],
    ),
    (
        GoalCategory::Project,
        ToolCategory::Code,
        "Code AI tools dramatically speed up project development, from scaffolding to debugging to deployment.",
        &[
            "Cursor for full-stack dev",
            "v0 by Vercel for UI",
            "Claude for architecture planning",
        ],
    ),
    (
        GoalCategory::Project,
        ToolCategory::Creative,
        "Creative AI tools generate assets, designs, and content that bring your project to life without a full design team.",
        &[
            "Midjourney for visuals",
            "Canva AI for design",
            "ElevenLabs for voice",
        ],
    ),
    (
        GoalCategory::Financial,
        ToolCategory::Analytics,
        "Analytics AI tools help track spending, forecast budgets, and identify cost optimization opportunities.",
        &[
            "ChatGPT for financial analysis",
            "Columns for data viz",
            "Mint AI for budgeting",
        ],
    ),
    (
        GoalCategory::Health,
        ToolCategory::Productivity,
        "Productivity AI tools can help build healthy habits, manage schedules for work-life balance, and reduce cognitive load.",
        &[
            "Reclaim.ai for schedule optimization",
            "Headspace AI for mindfulness",
            "Whoop for health tracking",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_has_nine_entries() {
        let table = RecommendationTable::builtin();
        assert_eq!(table.len(), 9);
        assert!(table
            .entries()
            .iter()
            .all(|rec| rec.examples.len() == 3 && !rec.description.is_empty()));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = RecommendationTable::builtin() as *const _;
        let b = RecommendationTable::builtin() as *const _;
        assert_eq!(a, b);
    }

    #[test]
    fn test_for_goal_keeps_table_order() {
        let project: Vec<ToolCategory> = RecommendationTable::builtin()
            .for_goal(GoalCategory::Project)
            .map(|rec| rec.tool_category)
            .collect();
        assert_eq!(
            project,
            vec![
                ToolCategory::Productivity,
                ToolCategory::Code,
                ToolCategory::Creative
            ]
        );

        assert_eq!(
            RecommendationTable::builtin()
                .for_goal(GoalCategory::Other)
                .count(),
            0
        );
    }

    #[test]
    fn test_first_example() {
        let rec = RecommendationTable::builtin()
            .for_goal(GoalCategory::Learning)
            .next()
            .unwrap();
        assert_eq!(rec.first_example(), Some("Perplexity for research"));
    }
}
