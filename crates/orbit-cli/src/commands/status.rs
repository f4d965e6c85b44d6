//! Status command implementation

use std::fs;
use std::path::Path;

use anyhow::Result;

use super::{load_engine, load_snapshot};

pub fn cmd_status(data_path: &Path, config_path: Option<&Path>) -> Result<()> {
    println!();
    println!("📊 AI Orbit Status");
    println!("   ─────────────────────────────────────────────────────────────");

    println!("   Data: {}", data_path.display());
    if data_path.exists() {
        if let Ok(metadata) = fs::metadata(data_path) {
            let size_kb = metadata.len() as f64 / 1024.0;
            if size_kb < 1024.0 {
                println!("   Size: {:.1} KB", size_kb);
            } else {
                println!("   Size: {:.1} MB", size_kb / 1024.0);
            }
        }
    } else {
        println!("   Size: (data file not found, treating as empty)");
    }

    let engine = load_engine(config_path)?;
    let config = engine.config();
    println!("   Config: {}", config.source());

    match load_snapshot(data_path) {
        Ok(snapshot) => {
            let counts = snapshot.counts();
            println!();
            println!("   Tools: {}", counts.tools);
            println!("   Goals: {}", counts.goals);
            println!("   Decisions: {}", counts.decisions);
        }
        Err(e) => {
            println!();
            println!("   ❌ Error reading data file: {:#}", e);
        }
    }

    let t = &config.thresholds;
    println!();
    println!("   Thresholds:");
    println!("      High spend:           > ${:.2}/mo", t.high_spend_monthly);
    println!("      Overlap:              >= {} tools per category", t.overlap_min_tools);
    println!("      Stuck goals:          progress below {}%", t.stuck_progress_below);
    println!("      Pending decisions:    >= {}", t.pending_decisions_min);
    println!("      Correlation:          >= {} decisions", t.correlation_min_decisions);
    println!("      Negative outcomes:    >= {}", t.negative_decisions_min);
    println!(
        "   Recommendations: {} entries, {} analyzers",
        config.recommendations.len(),
        engine.analyzer_kinds().len()
    );

    println!();
    Ok(())
}
