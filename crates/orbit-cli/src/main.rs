//! AI Orbit CLI - Insight engine for your AI tool stack
//!
//! Usage:
//!   orbit insights                 Generate insights from data/db.json
//!   orbit insights --json          Same, as JSON
//!   orbit analytics                Spend, category and outcome breakdowns
//!   orbit recommendations          Tool categories suggested per goal type
//!   orbit status                   Data file, config source, thresholds

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Insights { limit, json } => {
            commands::cmd_insights(&cli.data, config, limit, json)
        }
        Commands::Analytics { json } => commands::cmd_analytics(&cli.data, config, json),
        Commands::Recommendations { goal } => {
            commands::cmd_recommendations(config, goal.as_deref())
        }
        Commands::Status => commands::cmd_status(&cli.data, config),
    }
}
