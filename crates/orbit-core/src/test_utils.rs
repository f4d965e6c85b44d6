//! Test utilities: terse builders for tools, goals and decisions
//!
//! Enabled for unit tests and, through the `test-utils` feature, for
//! downstream crates.

use crate::models::{
    DataAccess, Decision, DecisionCategory, Goal, GoalCategory, GoalStatus, OutcomeStatus, Tool,
    ToolCategory, ToolStatus,
};

pub fn tool(id: &str, name: &str, category: ToolCategory, cost: f64, status: ToolStatus) -> Tool {
    Tool {
        id: id.to_string(),
        name: name.to_string(),
        category,
        url: String::new(),
        monthly_cost: cost,
        data_access: DataAccess::None,
        status,
        purpose: String::new(),
        added_at: None,
        updated_at: None,
    }
}

pub fn goal(
    id: &str,
    title: &str,
    category: GoalCategory,
    status: GoalStatus,
    progress: u8,
    linked: &[&str],
) -> Goal {
    Goal {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        category,
        status,
        progress,
        linked_tool_ids: linked.iter().map(|s| s.to_string()).collect(),
        milestones: vec![],
        target_date: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn decision(id: &str, outcome: Option<OutcomeStatus>, tools_used: &[&str]) -> Decision {
    Decision {
        id: id.to_string(),
        title: format!("Decision {}", id),
        context: String::new(),
        options: vec![],
        chosen_option: String::new(),
        ai_tools_used: tools_used.iter().map(|s| s.to_string()).collect(),
        outcome: None,
        outcome_status: outcome,
        category: DecisionCategory::Other,
        created_at: None,
        updated_at: None,
    }
}
