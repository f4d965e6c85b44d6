//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `common` - Shared utilities (load_snapshot, load_engine)
//! - `insights` - Insight generation
//! - `analytics` - Analytics summary
//! - `recommendations` - Recommendation catalog listing
//! - `status` - Data and config status

pub mod analytics;
pub mod common;
pub mod insights;
pub mod recommendations;
pub mod status;

// Re-export command functions for main.rs
pub use analytics::*;
pub use common::*;
pub use insights::*;
pub use recommendations::*;
pub use status::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
