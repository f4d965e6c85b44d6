//! Decision Insights
//!
//! - Decisions still waiting for an outcome review
//! - The tool that shows up most often in positive-outcome decisions
//! - A run of negative outcomes

use crate::models::{Decision, OutcomeStatus};

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerKind, Insight, InsightCategory, InsightType};

/// Most frequent tool id across the given decisions.
///
/// Every occurrence in `ai_tools_used` counts. Ties go to the id seen first.
pub fn top_tool<'a>(decisions: &[&'a Decision]) -> Option<(&'a str, usize)> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for &decision in decisions {
        for id in &decision.ai_tools_used {
            match counts.iter_mut().find(|(seen, _)| *seen == id.as_str()) {
                Some((_, n)) => *n += 1,
                None => counts.push((id.as_str(), 1)),
            }
        }
    }

    // Replace only on a strictly higher count
    counts.into_iter().fold(None, |best, (id, n)| match best {
        Some((_, best_n)) if best_n >= n => best,
        _ => Some((id, n)),
    })
}

fn with_outcome(decisions: &[Decision], status: OutcomeStatus) -> Vec<&Decision> {
    decisions
        .iter()
        .filter(|d| d.outcome_status() == status)
        .collect()
}

pub struct DecisionAnalyzer;

impl DecisionAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DecisionAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for DecisionAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Decisions
    }

    fn name(&self) -> &'static str {
        "Decisions"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut findings = Vec::new();
        let thresholds = ctx.thresholds;

        let positive = with_outcome(ctx.decisions, OutcomeStatus::Positive);
        let negative = with_outcome(ctx.decisions, OutcomeStatus::Negative);
        let pending = with_outcome(ctx.decisions, OutcomeStatus::Pending);

        if pending.len() >= thresholds.pending_decisions_min {
            findings.push(Insight::new(
                "pending-decisions",
                InsightType::Tip,
                InsightCategory::Decisions,
                format!("{} decisions awaiting outcome review", pending.len()),
                "Revisit past decisions and update their outcomes. This helps you learn what works.",
            ));
        }

        if !positive.is_empty() && ctx.decisions.len() >= thresholds.correlation_min_decisions {
            // Only the top id is considered; an unknown id yields nothing
            if let Some((tool_id, count)) = top_tool(&positive) {
                match ctx.tool(tool_id) {
                    Some(tool) => findings.push(Insight::new(
                        "best-decision-tool",
                        InsightType::Success,
                        InsightCategory::Decisions,
                        format!("{} correlates with your best decisions", tool.name),
                        format!(
                            "{} of your positive-outcome decisions involved {}. It may be your most valuable tool.",
                            count, tool.name
                        ),
                    )),
                    None => tracing::debug!(tool_id, "Top decision tool is not registered"),
                }
            }
        }

        if negative.len() >= thresholds.negative_decisions_min {
            findings.push(Insight::new(
                "negative-pattern",
                InsightType::Warning,
                InsightCategory::Decisions,
                format!("{} decisions had negative outcomes", negative.len()),
                "Review these decisions to identify patterns. Were they rushed? Missing data? Wrong category?",
            ));
        }

        findings
    }
}
