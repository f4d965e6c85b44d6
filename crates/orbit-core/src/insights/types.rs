//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Analyzers that make up the engine, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    /// Total spend and free-tier coverage
    Spending,
    /// Several tools in the same category
    ToolOverlap,
    /// Paused and trial tools
    ToolStatus,
    /// Goal progress, linking and completion
    Goals,
    /// Decision outcomes and tool correlation
    Decisions,
    /// Tool categories missing for active goals
    Recommendations,
}

impl AnalyzerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzerKind::Spending => "spending",
            AnalyzerKind::ToolOverlap => "tool_overlap",
            AnalyzerKind::ToolStatus => "tool_status",
            AnalyzerKind::Goals => "goals",
            AnalyzerKind::Decisions => "decisions",
            AnalyzerKind::Recommendations => "recommendations",
        }
    }
}

impl fmt::Display for AnalyzerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightType {
    Info,
    Warning,
    Success,
    Tip,
}

impl InsightType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightType::Info => "info",
            InsightType::Warning => "warning",
            InsightType::Success => "success",
            InsightType::Tip => "tip",
        }
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(InsightType::Info),
            "warning" => Ok(InsightType::Warning),
            "success" => Ok(InsightType::Success),
            "tip" => Ok(InsightType::Tip),
            _ => Err(format!("Unknown insight type: {}", s)),
        }
    }
}

/// Subject area an insight belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightCategory {
    Spending,
    Tools,
    Goals,
    Decisions,
    Recommendation,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Spending => "spending",
            InsightCategory::Tools => "tools",
            InsightCategory::Goals => "goals",
            InsightCategory::Decisions => "decisions",
            InsightCategory::Recommendation => "recommendation",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spending" => Ok(InsightCategory::Spending),
            "tools" => Ok(InsightCategory::Tools),
            "goals" => Ok(InsightCategory::Goals),
            "decisions" => Ok(InsightCategory::Decisions),
            "recommendation" => Ok(InsightCategory::Recommendation),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// A single advisory finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Stable per rule and subject (e.g. "overlap-Code", "rec-g1-Research")
    pub id: String,
    #[serde(rename = "type")]
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
}

impl Insight {
    pub fn new(
        id: impl Into<String>,
        insight_type: InsightType,
        category: InsightCategory,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            insight_type,
            title: title.into(),
            description: description.into(),
            category,
        }
    }
}

/// "s" when `count` calls for a plural noun
pub(crate) fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Join names as "A, B, C"
pub(crate) fn join_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

pub(crate) fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Dollar amount rounded to cents, shown without cents when whole
pub(crate) fn format_dollars(amount: f64) -> String {
    let amount = round_cents(amount);
    if amount.fract() == 0.0 {
        format!("${:.0}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_serializes_type_field() {
        let insight = Insight::new(
            "high-spend",
            InsightType::Warning,
            InsightCategory::Spending,
            "Title",
            "Description",
        );
        let value = serde_json::to_value(&insight).unwrap();
        assert_eq!(value["type"], "warning");
        assert_eq!(value["category"], "spending");
        assert_eq!(value["id"], "high-spend");
    }

    #[test]
    fn test_insight_type_round_trip_str() {
        assert_eq!(InsightType::from_str("tip").unwrap(), InsightType::Tip);
        assert_eq!(InsightType::Success.as_str(), "success");
        assert!(InsightCategory::from_str("billing").is_err());
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(20.0), "$20");
        assert_eq!(format_dollars(19.99), "$19.99");
        assert_eq!(format_dollars(19.999), "$20");
        assert_eq!(format_dollars(12.5), "$12.50");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1), "");
        assert_eq!(plural(0), "s");
        assert_eq!(plural(3), "s");
    }
}
