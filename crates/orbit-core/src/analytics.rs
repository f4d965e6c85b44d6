//! Analytics summary
//!
//! Aggregate figures derived from a snapshot: spend, category breakdowns,
//! decision outcomes and data-access exposure. Everything here is computed
//! on demand; nothing is persisted.

use serde::Serialize;

use crate::catalog::ToolRecommendation;
use crate::insights::types::round_cents;
use crate::insights::InsightEngine;
use crate::models::{DataAccess, GoalStatus, OutcomeStatus, ToolCategory, ToolStatus};
use crate::snapshot::Snapshot;

/// Maximum number of recommendations surfaced in the summary
pub const MAX_RELEVANT_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub category: ToolCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySpend {
    pub category: ToolCategory,
    /// Monthly spend, rounded to cents
    pub spend: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub title: String,
    pub progress: u8,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeCount {
    pub outcome: OutcomeStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataAccessCount {
    pub access: DataAccess,
    pub count: usize,
}

/// Dashboard-level numbers for one snapshot
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    /// Monthly cost of every tool that is not paused
    pub total_monthly_spend: f64,
    pub active_tools: usize,
    pub goal_completion_percent: u32,
    pub insight_count: usize,
    pub tools_by_category: Vec<CategoryCount>,
    /// Paid tools only, highest spend first
    pub spend_by_category: Vec<CategorySpend>,
    pub goal_progress: Vec<GoalProgress>,
    pub decision_outcomes: Vec<OutcomeCount>,
    /// Fixed none/limited/full order, zero rows omitted
    pub data_access: Vec<DataAccessCount>,
    pub relevant_recommendations: Vec<ToolRecommendation>,
}

impl AnalyticsSummary {
    pub fn compute(snapshot: &Snapshot, engine: &InsightEngine) -> Self {
        let tools = &snapshot.tools;
        let goals = &snapshot.goals;
        let decisions = &snapshot.decisions;

        let total_monthly_spend: f64 = tools
            .iter()
            .filter(|t| !t.is_paused())
            .map(|t| t.monthly_cost)
            .sum();

        let active_tools = tools
            .iter()
            .filter(|t| t.status == ToolStatus::Active)
            .count();

        let completed = goals
            .iter()
            .filter(|g| g.status == GoalStatus::Completed)
            .count();
        let goal_completion_percent = if goals.is_empty() {
            0
        } else {
            ((completed as f64 / goals.len() as f64) * 100.0).round() as u32
        };

        let mut tools_by_category: Vec<CategoryCount> = Vec::new();
        for tool in tools {
            match tools_by_category
                .iter_mut()
                .find(|c| c.category == tool.category)
            {
                Some(entry) => entry.count += 1,
                None => tools_by_category.push(CategoryCount {
                    category: tool.category,
                    count: 1,
                }),
            }
        }

        let mut spend_by_category: Vec<CategorySpend> = Vec::new();
        for tool in tools.iter().filter(|t| t.is_paid()) {
            match spend_by_category
                .iter_mut()
                .find(|c| c.category == tool.category)
            {
                Some(entry) => entry.spend += tool.monthly_cost,
                None => spend_by_category.push(CategorySpend {
                    category: tool.category,
                    spend: tool.monthly_cost,
                }),
            }
        }
        for entry in &mut spend_by_category {
            entry.spend = round_cents(entry.spend);
        }
        // Stable sort keeps first-seen order on ties
        spend_by_category.sort_by(|a, b| {
            b.spend
                .partial_cmp(&a.spend)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let goal_progress = goals
            .iter()
            .map(|g| GoalProgress {
                title: g.title.clone(),
                progress: g.progress,
                status: g.status,
            })
            .collect();

        let mut decision_outcomes: Vec<OutcomeCount> = Vec::new();
        for decision in decisions {
            let outcome = decision.outcome_status();
            match decision_outcomes.iter_mut().find(|o| o.outcome == outcome) {
                Some(entry) => entry.count += 1,
                None => decision_outcomes.push(OutcomeCount { outcome, count: 1 }),
            }
        }

        let data_access = DataAccess::all()
            .iter()
            .map(|&access| DataAccessCount {
                access,
                count: tools.iter().filter(|t| t.data_access == access).count(),
            })
            .filter(|row| row.count > 0)
            .collect();

        let relevant_recommendations = engine
            .config()
            .recommendations
            .entries()
            .iter()
            .filter(|rec| {
                goals
                    .iter()
                    .any(|g| g.is_active() && g.category == rec.goal_category)
            })
            .take(MAX_RELEVANT_RECOMMENDATIONS)
            .cloned()
            .collect();

        let insight_count = engine.generate(tools, goals, decisions).len();

        Self {
            total_monthly_spend,
            active_tools,
            goal_completion_percent,
            insight_count,
            tools_by_category,
            spend_by_category,
            goal_progress,
            decision_outcomes,
            data_access,
            relevant_recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalCategory;
    use crate::test_utils::{decision, goal, tool};

    fn sample() -> Snapshot {
        let mut chatgpt = tool("t1", "ChatGPT", ToolCategory::Writing, 20.0, ToolStatus::Active);
        chatgpt.data_access = DataAccess::Full;
        let mut copilot = tool("t2", "Copilot", ToolCategory::Code, 10.0, ToolStatus::Active);
        copilot.data_access = DataAccess::Limited;
        let cursor = tool("t3", "Cursor", ToolCategory::Code, 15.499, ToolStatus::Paused);
        let gemini = tool("t4", "Gemini", ToolCategory::Research, 0.0, ToolStatus::Trial);

        Snapshot {
            tools: vec![chatgpt, copilot, cursor, gemini],
            goals: vec![
                goal("g1", "Learn Rust", GoalCategory::Learning, GoalStatus::Active, 30, &["t2"]),
                goal("g2", "Launch", GoalCategory::Project, GoalStatus::Completed, 100, &[]),
                goal("g3", "Run", GoalCategory::Health, GoalStatus::Paused, 10, &[]),
            ],
            decisions: vec![
                decision("d1", Some(OutcomeStatus::Positive), &["t1"]),
                decision("d2", None, &[]),
                decision("d3", Some(OutcomeStatus::Positive), &[]),
            ],
        }
    }

    #[test]
    fn test_totals() {
        let summary = AnalyticsSummary::compute(&sample(), &InsightEngine::new());
        assert_eq!(summary.total_monthly_spend, 30.0);
        assert_eq!(summary.active_tools, 2);
        assert_eq!(summary.goal_completion_percent, 33);
        assert_eq!(summary.goal_progress.len(), 3);
        assert!(summary.insight_count >= 1);
    }

    #[test]
    fn test_category_breakdowns() {
        let summary = AnalyticsSummary::compute(&sample(), &InsightEngine::new());
        let counts: Vec<(ToolCategory, usize)> = summary
            .tools_by_category
            .iter()
            .map(|row| (row.category, row.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                (ToolCategory::Writing, 1),
                (ToolCategory::Code, 2),
                (ToolCategory::Research, 1),
            ]
        );

        let spend: Vec<(ToolCategory, f64)> = summary
            .spend_by_category
            .iter()
            .map(|row| (row.category, row.spend))
            .collect();
        assert_eq!(
            spend,
            vec![(ToolCategory::Code, 25.5), (ToolCategory::Writing, 20.0)]
        );
    }

    #[test]
    fn test_outcomes_and_data_access() {
        let summary = AnalyticsSummary::compute(&sample(), &InsightEngine::new());
        let outcomes: Vec<(OutcomeStatus, usize)> = summary
            .decision_outcomes
            .iter()
            .map(|row| (row.outcome, row.count))
            .collect();
        assert_eq!(
            outcomes,
            vec![(OutcomeStatus::Positive, 2), (OutcomeStatus::Pending, 1)]
        );

        let access: Vec<(DataAccess, usize)> = summary
            .data_access
            .iter()
            .map(|row| (row.access, row.count))
            .collect();
        assert_eq!(
            access,
            vec![
                (DataAccess::None, 2),
                (DataAccess::Limited, 1),
                (DataAccess::Full, 1),
            ]
        );
    }

    #[test]
    fn test_relevant_recommendations_follow_active_goals() {
        let summary = AnalyticsSummary::compute(&sample(), &InsightEngine::new());
        let cats: Vec<ToolCategory> = summary
            .relevant_recommendations
            .iter()
            .map(|r| r.tool_category)
            .collect();
        assert_eq!(cats, vec![ToolCategory::Research, ToolCategory::Code]);
    }

    #[test]
    fn test_relevant_recommendations_capped() {
        let goals = GoalCategory::all()
            .iter()
            .enumerate()
            .map(|(i, &cat)| goal(&format!("g{}", i), "G", cat, GoalStatus::Active, 0, &[]))
            .collect::<Vec<_>>();
        let snapshot = Snapshot {
            goals,
            ..Snapshot::default()
        };
        let summary = AnalyticsSummary::compute(&snapshot, &InsightEngine::new());
        assert_eq!(
            summary.relevant_recommendations.len(),
            MAX_RELEVANT_RECOMMENDATIONS
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let summary = AnalyticsSummary::compute(&Snapshot::default(), &InsightEngine::new());
        assert_eq!(summary.total_monthly_spend, 0.0);
        assert_eq!(summary.goal_completion_percent, 0);
        assert_eq!(summary.insight_count, 1);
        assert!(summary.tools_by_category.is_empty());
        assert!(summary.data_access.is_empty());
    }
}
