//! Spending Insight
//!
//! - High combined spend on non-paused tools
//! - No free-tier tools at all

use super::engine::{AnalysisContext, Analyzer};
use super::types::{AnalyzerKind, Insight, InsightCategory, InsightType};

/// Monthly spend across tools that are still billing
pub fn monthly_spend(ctx: &AnalysisContext<'_>) -> f64 {
    ctx.tools
        .iter()
        .filter(|t| !t.is_paused())
        .map(|t| t.monthly_cost)
        .sum()
}

pub struct SpendingAnalyzer;

impl SpendingAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpendingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for SpendingAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Spending
    }

    fn name(&self) -> &'static str {
        "Spending"
    }

    fn analyze(&self, ctx: &AnalysisContext<'_>) -> Vec<Insight> {
        let mut findings = Vec::new();

        let total = monthly_spend(ctx);
        if total > ctx.thresholds.high_spend_monthly {
            findings.push(Insight::new(
                "high-spend",
                InsightType::Warning,
                InsightCategory::Spending,
                format!("You're spending ${}/mo on AI tools", total.floor()),
                "Consider auditing tools you use less frequently. Pausing unused subscriptions could save money.",
            ));
        }

        let any_paid = ctx.tools.iter().any(|t| t.is_paid());
        let any_free = ctx.tools.iter().any(|t| t.is_free());
        if any_paid && !any_free {
            findings.push(Insight::new(
                "no-free-tools",
                InsightType::Tip,
                InsightCategory::Spending,
                "All your tools are paid",
                "Many AI tools offer free tiers. Consider free alternatives for tools you use lightly.",
            ));
        }

        findings
    }
}
