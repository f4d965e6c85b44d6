//! CLI argument definitions using clap
//!
//! This module contains the clap structs for parsing CLI arguments.
//! The command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// AI Orbit - Govern your AI tools, goals and decisions
#[derive(Parser)]
#[command(name = "orbit")]
#[command(about = "Rule-based insights for your AI tool stack", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the dashboard data document
    #[arg(long, default_value = "data/db.json", global = true)]
    pub data: PathBuf,

    /// Insight config file (thresholds and recommendation table)
    ///
    /// Without this flag the user config directory is checked, then the
    /// built-in defaults are used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate insights for the current data
    Insights {
        /// Show at most this many insights
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the insight list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the analytics summary
    Analytics {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List tool recommendations by goal category
    Recommendations {
        /// Only show recommendations for this goal category (Career, Learning, ...)
        #[arg(short, long)]
        goal: Option<String>,
    },

    /// Show data file, config source and counts
    Status,
}
