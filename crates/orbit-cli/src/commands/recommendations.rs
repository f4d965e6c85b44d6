//! Recommendation catalog listing

use std::path::Path;

use anyhow::{anyhow, Result};
use orbit_core::models::GoalCategory;
use orbit_core::ToolRecommendation;

use super::load_engine;

/// Catalog entries, optionally restricted to one goal category
pub fn select_recommendations(
    config_path: Option<&Path>,
    goal: Option<&str>,
) -> Result<Vec<ToolRecommendation>> {
    let engine = load_engine(config_path)?;
    let table = &engine.config().recommendations;

    let entries = match goal {
        Some(raw) => {
            let category: GoalCategory = raw.parse().map_err(|e: String| anyhow!(e))?;
            table.for_goal(category).cloned().collect()
        }
        None => table.entries().to_vec(),
    };
    Ok(entries)
}

pub fn cmd_recommendations(config_path: Option<&Path>, goal: Option<&str>) -> Result<()> {
    let entries = select_recommendations(config_path, goal)?;

    println!();
    println!("💡 Tool Recommendations ({})", entries.len());
    println!("   ─────────────────────────────────────────────────────────────");

    if entries.is_empty() {
        println!("   No recommendations for this goal category.");
    }

    for rec in &entries {
        println!();
        println!("   🎯 {} → {}", rec.goal_category, rec.tool_category);
        println!("      {}", rec.description);
        if !rec.examples.is_empty() {
            println!("      Examples: {}", rec.examples.join(", "));
        }
    }

    println!();
    Ok(())
}
