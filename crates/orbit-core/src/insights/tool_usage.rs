//! Tool Usage Insights
//!
//! - Overlap: several tools registered under one category
//! - Status: tools currently paused or on trial

use crate::models::{Tool, ToolCategory, ToolStatus};

use super::engine::{AnalysisContext, Analyzer};
use super::types::{
    format_dollars, join_names, plural, round_cents, AnalyzerKind, Insight, InsightCategory,
    InsightType,
};

/// Group tools by category, categories and members in first-seen order
pub fn group_by_category<'a>(tools: &'a [Tool]) -> Vec<(ToolCategory, Vec<&'a Tool>)> {
    let mut groups: Vec<(ToolCategory, Vec<&Tool>)> = Vec::new();
    for tool in tools {
        match groups.iter_mut().find(|(cat, _)| *cat == tool.category) {
            Some((_, members)) => members.push(tool),
            None => groups.push((tool.category, vec![tool])),
        }
    }
    groups
}

/// Insight that flags categories with redundant tools
pub struct ToolOverlapAnalyzer;

impl ToolOverlapAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToolOverlapAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ToolOverlapAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::ToolOverlap
    }

    fn name(&self) -> &'static str {
        "Tool Overlap"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        group_by_category(ctx.tools)
            .into_iter()
            .filter(|(_, members)| members.len() >= ctx.thresholds.overlap_min_tools)
            .map(|(category, members)| {
                Insight::new(
                    format!("overlap-{}", category),
                    InsightType::Warning,
                    InsightCategory::Tools,
                    format!("{} tools in {}", members.len(), category),
                    format!(
                        "You have {}. Consider if all are needed or if some overlap.",
                        join_names(members.iter().map(|t| t.name.as_str()))
                    ),
                )
            })
            .collect()
    }
}

/// Insight that reports paused and trial tools
pub struct ToolStatusAnalyzer;

impl ToolStatusAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToolStatusAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for ToolStatusAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::ToolStatus
    }

    fn name(&self) -> &'static str {
        "Tool Status"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut findings = Vec::new();

        let paused: Vec<&Tool> = ctx
            .tools
            .iter()
            .filter(|t| t.status == ToolStatus::Paused)
            .collect();
        if !paused.is_empty() {
            let saved = round_cents(paused.iter().map(|t| t.monthly_cost).sum());
            let names = join_names(paused.iter().map(|t| t.name.as_str()));
            let description = if saved > 0.0 {
                format!(
                    "You're saving {}/mo by pausing {}.",
                    format_dollars(saved),
                    names
                )
            } else {
                format!(
                    "{} {} paused. Reactivate or remove if no longer needed.",
                    names,
                    if paused.len() == 1 { "is" } else { "are" }
                )
            };
            findings.push(Insight::new(
                "paused-tools",
                InsightType::Info,
                InsightCategory::Tools,
                format!("{} paused tool{}", paused.len(), plural(paused.len())),
                description,
            ));
        }

        let trial: Vec<&Tool> = ctx
            .tools
            .iter()
            .filter(|t| t.status == ToolStatus::Trial)
            .collect();
        if !trial.is_empty() {
            findings.push(Insight::new(
                "trial-tools",
                InsightType::Tip,
                InsightCategory::Tools,
                format!("{} tool{} on trial", trial.len(), plural(trial.len())),
                format!(
                    "Evaluate {} before the trial ends to avoid unexpected charges.",
                    join_names(trial.iter().map(|t| t.name.as_str()))
                ),
            ));
        }

        findings
    }
}
