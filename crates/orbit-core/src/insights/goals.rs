//! Goal Insights
//!
//! Stuck active goals, active goals with no linked tools, and completed goals.

use crate::models::{Goal, GoalStatus};

use super::engine::{AnalysisContext, Analyzer};
use super::types::{plural, AnalyzerKind, Insight, InsightCategory, InsightType};

pub struct GoalAnalyzer;

impl GoalAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for GoalAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Goals
    }

    fn name(&self) -> &'static str {
        "Goals"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut findings = Vec::new();
        let below = ctx.thresholds.stuck_progress_below;

        let active: Vec<&Goal> = ctx.goals.iter().filter(|g| g.is_active()).collect();

        // Started but not yet halfway
        let stuck: Vec<&&Goal> = active
            .iter()
            .filter(|g| g.progress > 0 && g.progress < below)
            .collect();
        if let Some(first) = stuck.first() {
            let more = if stuck.len() > 1 {
                format!(" and {} more", stuck.len() - 1)
            } else {
                String::new()
            };
            findings.push(Insight::new(
                "stuck-goals",
                InsightType::Warning,
                InsightCategory::Goals,
                format!(
                    "{} goal{} under {}% progress",
                    stuck.len(),
                    plural(stuck.len()),
                    below
                ),
                format!(
                    "\"{}\"{} may need attention. Consider breaking them into smaller steps.",
                    first.title, more
                ),
            ));
        }

        let unlinked = active
            .iter()
            .filter(|g| g.linked_tool_ids.is_empty())
            .count();
        if unlinked > 0 {
            findings.push(Insight::new(
                "unlinked-goals",
                InsightType::Tip,
                InsightCategory::Goals,
                format!("{} goal{} without linked tools", unlinked, plural(unlinked)),
                "Link AI tools to your goals to track which tools drive the most value for each objective.",
            ));
        }

        let completed = ctx
            .goals
            .iter()
            .filter(|g| g.status == GoalStatus::Completed)
            .count();
        if completed > 0 {
            findings.push(Insight::new(
                "completed-goals",
                InsightType::Success,
                InsightCategory::Goals,
                format!("{} goal{} completed!", completed, plural(completed)),
                "Great progress. Set new goals to keep your momentum going.",
            ));
        }

        findings
    }
}
