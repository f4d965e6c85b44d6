//! Analytics command implementation

use std::path::Path;

use anyhow::{Context, Result};
use orbit_core::AnalyticsSummary;

use super::{load_engine, load_snapshot, truncate};

pub fn cmd_analytics(data_path: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let snapshot = load_snapshot(data_path)?;
    let engine = load_engine(config_path)?;
    let summary = AnalyticsSummary::compute(&snapshot, &engine);

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .context("Failed to serialize analytics summary")?;
        println!("{}", out);
        return Ok(());
    }

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│           📈 AI Orbit Analytics         │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Monthly Spend:     ${:.2}", summary.total_monthly_spend);
    println!("  Active Tools:      {}", summary.active_tools);
    println!("  Goal Completion:   {}%", summary.goal_completion_percent);
    println!("  Insights:          {}", summary.insight_count);

    if !summary.tools_by_category.is_empty() {
        println!();
        println!("  🧰 Tools by Category");
        for row in &summary.tools_by_category {
            println!("     {:<15} {}", row.category.as_str(), row.count);
        }
    }

    if !summary.spend_by_category.is_empty() {
        println!();
        println!("  💸 Spend by Category");
        for row in &summary.spend_by_category {
            println!("     {:<15} ${:.2}", row.category.as_str(), row.spend);
        }
    }

    if !summary.goal_progress.is_empty() {
        println!();
        println!("  🎯 Goal Progress");
        for row in &summary.goal_progress {
            println!(
                "     {:<30} {:>3}%  ({})",
                truncate(&row.title, 30),
                row.progress,
                row.status
            );
        }
    }

    if !summary.decision_outcomes.is_empty() {
        println!();
        println!("  🧭 Decision Outcomes");
        for row in &summary.decision_outcomes {
            println!("     {:<15} {}", row.outcome.as_str(), row.count);
        }
    }

    if !summary.data_access.is_empty() {
        println!();
        println!("  🔐 Data Access");
        for row in &summary.data_access {
            println!("     {:<15} {}", row.access.as_str(), row.count);
        }
    }

    if !summary.relevant_recommendations.is_empty() {
        println!();
        println!("  💡 Suggested for Your Goals");
        for rec in &summary.relevant_recommendations {
            println!(
                "     {} → {}: {}",
                rec.goal_category,
                rec.tool_category,
                rec.examples.join(", ")
            );
        }
    }

    println!();
    Ok(())
}
