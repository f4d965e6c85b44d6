//! Domain models for AI Orbit
//!
//! These mirror the JSON document written by the storage layer, so field
//! names are camelCase on the wire. Optional collections default to empty
//! and unknown category names fall back to `Other`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered AI tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub category: ToolCategory,
    #[serde(default)]
    pub url: String,
    /// Monthly cost in dollars
    #[serde(default)]
    pub monthly_cost: f64,
    #[serde(default)]
    pub data_access: DataAccess,
    pub status: ToolStatus,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tool {
    pub fn is_paused(&self) -> bool {
        self.status == ToolStatus::Paused
    }

    /// Free tier or otherwise zero-cost
    pub fn is_free(&self) -> bool {
        self.monthly_cost == 0.0
    }

    pub fn is_paid(&self) -> bool {
        self.monthly_cost > 0.0
    }
}

/// Tool categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolCategory {
    Productivity,
    Creative,
    Code,
    Research,
    Communication,
    Analytics,
    Writing,
    #[serde(other)]
    Other,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Productivity => "Productivity",
            Self::Creative => "Creative",
            Self::Code => "Code",
            Self::Research => "Research",
            Self::Communication => "Communication",
            Self::Analytics => "Analytics",
            Self::Writing => "Writing",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [ToolCategory] {
        &[
            Self::Productivity,
            Self::Creative,
            Self::Code,
            Self::Research,
            Self::Communication,
            Self::Analytics,
            Self::Writing,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for ToolCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown tool category: {}", s))
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tool subscription status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Active,
    Paused,
    Trial,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Trial => "trial",
        }
    }
}

impl std::str::FromStr for ToolStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "trial" => Ok(Self::Trial),
            _ => Err(format!("Unknown tool status: {}", s)),
        }
    }
}

impl std::fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How much of the user's data a tool can see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataAccess {
    #[default]
    None,
    Limited,
    Full,
}

impl DataAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Limited => "limited",
            Self::Full => "full",
        }
    }

    pub fn all() -> &'static [DataAccess] {
        &[Self::None, Self::Limited, Self::Full]
    }
}

impl std::fmt::Display for DataAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A goal the user is working towards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: GoalCategory,
    pub status: GoalStatus,
    /// Progress percentage (0-100)
    #[serde(default)]
    pub progress: u8,
    /// Tools believed to help with this goal (may contain dangling ids)
    #[serde(default)]
    pub linked_tool_ids: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub target_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Goal {
    pub fn is_active(&self) -> bool {
        self.status == GoalStatus::Active
    }
}

/// A checkpoint within a goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Goal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    Career,
    Learning,
    Project,
    Financial,
    Health,
    #[serde(other)]
    Other,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "Career",
            Self::Learning => "Learning",
            Self::Project => "Project",
            Self::Financial => "Financial",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [GoalCategory] {
        &[
            Self::Career,
            Self::Learning,
            Self::Project,
            Self::Financial,
            Self::Health,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| format!("Unknown goal category: {}", s))
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Goal lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged decision
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub chosen_option: String,
    /// Tools consulted when making the decision
    #[serde(default)]
    pub ai_tools_used: Vec<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub outcome_status: Option<OutcomeStatus>,
    pub category: DecisionCategory,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Decision {
    /// Outcome with a missing status read as pending
    pub fn outcome_status(&self) -> OutcomeStatus {
        self.outcome_status.unwrap_or_default()
    }
}

/// Decision categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionCategory {
    Business,
    Career,
    Technology,
    Financial,
    Personal,
    #[serde(other)]
    Other,
}

impl DecisionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Career => "Career",
            Self::Technology => "Technology",
            Self::Financial => "Financial",
            Self::Personal => "Personal",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for DecisionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a decision turned out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Positive,
    Neutral,
    Negative,
    #[default]
    Pending,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
