//! Insight command implementation

use std::path::Path;

use anyhow::{Context, Result};
use orbit_core::{Insight, InsightType};

use super::{load_engine, load_snapshot};

/// Icon shown before an insight title
pub fn insight_icon(insight_type: InsightType) -> &'static str {
    match insight_type {
        InsightType::Info => "ℹ️ ",
        InsightType::Warning => "⚠️ ",
        InsightType::Success => "✅",
        InsightType::Tip => "💡",
    }
}

/// Generate insights for the data file, optionally capped at `limit`
pub fn collect_insights(
    data_path: &Path,
    config_path: Option<&Path>,
    limit: Option<usize>,
) -> Result<Vec<Insight>> {
    let snapshot = load_snapshot(data_path)?;
    let engine = load_engine(config_path)?;

    let mut insights = engine.generate(&snapshot.tools, &snapshot.goals, &snapshot.decisions);
    if let Some(limit) = limit {
        insights.truncate(limit);
    }
    Ok(insights)
}

pub fn cmd_insights(
    data_path: &Path,
    config_path: Option<&Path>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let insights = collect_insights(data_path, config_path, limit)?;

    if json {
        let out =
            serde_json::to_string_pretty(&insights).context("Failed to serialize insights")?;
        println!("{}", out);
        return Ok(());
    }

    println!();
    println!("🔭 Insights ({})", insights.len());
    println!("   ─────────────────────────────────────────────────────────────");

    for insight in &insights {
        println!();
        println!(
            "   {} {}  [{}]",
            insight_icon(insight.insight_type),
            insight.title,
            insight.category
        );
        println!("      {}", insight.description);
    }

    println!();
    Ok(())
}
