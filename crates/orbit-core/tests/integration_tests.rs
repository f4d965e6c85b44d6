//! Integration tests for orbit-core
//!
//! These tests exercise the full snapshot → engine → insights workflow using
//! documents shaped like the dashboard's data file.

use orbit_core::{
    generate_insights,
    insights::WELCOME_INSIGHT_ID,
    EngineConfig, InsightCategory, InsightEngine, InsightType, Snapshot,
};
use serde_json::json;

fn snapshot(value: serde_json::Value) -> Snapshot {
    serde_json::from_value(value).expect("valid snapshot")
}

fn run(snap: &Snapshot) -> Vec<orbit_core::Insight> {
    generate_insights(&snap.tools, &snap.goals, &snap.decisions)
}

fn tool(id: &str, name: &str, category: &str, cost: f64, status: &str) -> serde_json::Value {
    json!({
        "id": id, "name": name, "category": category,
        "monthlyCost": cost, "status": status, "dataAccess": "none"
    })
}

/// A realistic dashboard with something for most analyzers to say
fn busy_dashboard() -> Snapshot {
    snapshot(json!({
        "tools": [
            tool("t1", "ChatGPT Plus", "Writing", 20.0, "active"),
            tool("t2", "GitHub Copilot", "Code", 10.0, "active"),
            tool("t3", "Cursor Pro", "Code", 20.0, "active"),
            tool("t4", "Replit Core", "Code", 25.0, "trial"),
            tool("t5", "Midjourney", "Creative", 30.0, "paused"),
            tool("t6", "Claude Pro", "Writing", 20.0, "active"),
            tool("t7", "Jasper", "Writing", 49.0, "active"),
        ],
        "goals": [
            {"id": "g1", "title": "Ship the beta", "category": "Project", "status": "active",
             "progress": 35, "linkedToolIds": ["t2", "t3"]},
            {"id": "g2", "title": "Learn Rust", "category": "Learning", "status": "active",
             "progress": 10, "linkedToolIds": []},
            {"id": "g3", "title": "Write a book", "category": "Other", "status": "completed",
             "progress": 100, "linkedToolIds": ["t1"]}
        ],
        "decisions": [
            {"id": "d1", "title": "Adopt Rust", "category": "Technology",
             "outcomeStatus": "positive", "aiToolsUsed": ["t6", "t2"]},
            {"id": "d2", "title": "Hire contractor", "category": "Business",
             "outcomeStatus": "negative", "aiToolsUsed": ["t1"]},
            {"id": "d3", "title": "Move to annual billing", "category": "Financial",
             "outcomeStatus": "positive", "aiToolsUsed": ["t6"]},
            {"id": "d4", "title": "Skip conference", "category": "Career",
             "outcomeStatus": "negative", "aiToolsUsed": []}
        ]
    }))
}

#[test]
fn test_empty_snapshot_returns_single_welcome() {
    let insights = run(&Snapshot::default());

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].id, WELCOME_INSIGHT_ID);
    assert_eq!(insights[0].insight_type, InsightType::Info);
    assert_eq!(insights[0].category, InsightCategory::Tools);
}

#[test]
fn test_code_overlap_is_the_only_insight() {
    let snap = snapshot(json!({
        "tools": [
            tool("a", "Copilot", "Code", 0.0, "active"),
            tool("b", "Cursor", "Code", 0.0, "active"),
            tool("c", "Codeium", "Code", 0.0, "active"),
        ]
    }));
    let insights = run(&snap);

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].id, "overlap-Code");
    assert_eq!(insights[0].insight_type, InsightType::Warning);
    for name in ["Copilot", "Cursor", "Codeium"] {
        assert!(insights[0].description.contains(name));
    }
}

#[test]
fn test_high_spend_boundary() {
    let at = snapshot(json!({ "tools": [tool("a", "A", "Code", 100.0, "active")] }));
    assert!(run(&at).iter().all(|i| i.id != "high-spend"));

    let above = snapshot(json!({ "tools": [tool("a", "A", "Code", 101.0, "active")] }));
    let spend: Vec<_> = run(&above)
        .into_iter()
        .filter(|i| i.id == "high-spend")
        .collect();
    assert_eq!(spend.len(), 1);
    assert_eq!(spend[0].insight_type, InsightType::Warning);
}

#[test]
fn test_busy_dashboard_order_and_content() {
    let insights = run(&busy_dashboard());
    let ids: Vec<&str> = insights.iter().map(|i| i.id.as_str()).collect();

    // Spend: 20 + 10 + 20 + 25 + 20 + 49 = 144 (Midjourney is paused)
    assert_eq!(
        ids,
        vec![
            "high-spend",
            "no-free-tools",
            "overlap-Writing",
            "overlap-Code",
            "paused-tools",
            "trial-tools",
            "stuck-goals",
            "unlinked-goals",
            "completed-goals",
            "best-decision-tool",
            "negative-pattern",
            "rec-g1-Productivity",
            "rec-g2-Research",
        ]
    );

    let high = &insights[0];
    assert!(high.title.contains("$144/mo"));

    let paused = insights.iter().find(|i| i.id == "paused-tools").unwrap();
    assert!(paused.description.contains("$30"));
    assert!(paused.description.contains("Midjourney"));

    let stuck = insights.iter().find(|i| i.id == "stuck-goals").unwrap();
    assert!(stuck.description.contains("\"Ship the beta\" and 1 more"));

    let best = insights.iter().find(|i| i.id == "best-decision-tool").unwrap();
    assert!(best.title.starts_with("Claude Pro"));
    assert!(best.description.starts_with("2 of"));
}

#[test]
fn test_determinism() {
    let snap = busy_dashboard();
    let first = run(&snap);
    let second = run(&snap);
    assert_eq!(first, second);

    let engine = InsightEngine::new();
    assert_eq!(
        engine.generate(&snap.tools, &snap.goals, &snap.decisions),
        first
    );
}

#[test]
fn test_tie_break_prefers_first_seen_tool() {
    let snap = snapshot(json!({
        "tools": [
            tool("a", "Tool A", "Research", 0.0, "active"),
            tool("b", "Tool B", "Writing", 0.0, "active"),
        ],
        "decisions": [
            {"id": "d1", "title": "One", "category": "Other",
             "outcomeStatus": "positive", "aiToolsUsed": ["a", "b"]},
            {"id": "d2", "title": "Two", "category": "Other",
             "outcomeStatus": "positive", "aiToolsUsed": ["a", "b"]},
            {"id": "d3", "title": "Three", "category": "Other"}
        ]
    }));
    let insights = run(&snap);
    let best = insights
        .iter()
        .find(|i| i.id == "best-decision-tool")
        .unwrap();
    assert!(best.title.starts_with("Tool A"));
}

#[test]
fn test_recommendation_suppressed_by_linked_tool() {
    let linked = snapshot(json!({
        "tools": [tool("r", "Perplexity", "Research", 0.0, "active")],
        "goals": [{"id": "g1", "title": "Study", "category": "Learning", "status": "active",
                   "progress": 0, "linkedToolIds": ["r"]}]
    }));
    assert!(run(&linked).iter().all(|i| i.id != "rec-g1-Research"));

    let unlinked = snapshot(json!({
        "goals": [{"id": "g1", "title": "Study", "category": "Learning", "status": "active",
                   "progress": 0}]
    }));
    let rec = run(&unlinked)
        .into_iter()
        .find(|i| i.id == "rec-g1-Research")
        .expect("recommendation emitted");
    assert_eq!(rec.insight_type, InsightType::Tip);
    assert!(rec.description.contains("Perplexity for research"));
}

#[test]
fn test_dangling_references_are_tolerated() {
    let snap = snapshot(json!({
        "goals": [{"id": "g1", "title": "Budget", "category": "Financial", "status": "active",
                   "progress": 20, "linkedToolIds": ["nope"]}],
        "decisions": [
            {"id": "d1", "title": "x", "category": "Other", "outcomeStatus": "positive",
             "aiToolsUsed": ["ghost"]},
            {"id": "d2", "title": "y", "category": "Other"},
            {"id": "d3", "title": "z", "category": "Other"}
        ]
    }));
    let insights = run(&snap);
    assert!(insights.iter().all(|i| i.id != "best-decision-tool"));
    assert!(insights.iter().any(|i| i.id == "rec-g1-Analytics"));
}

#[test]
fn test_custom_thresholds_change_triggers() {
    let config = EngineConfig::from_toml_str(
        r#"
        [thresholds]
        high_spend_monthly = 10.0
        overlap_min_tools = 2
        "#,
    )
    .unwrap();
    let engine = InsightEngine::with_config(config);
    let snap = snapshot(json!({
        "tools": [
            tool("a", "A", "Code", 6.0, "active"),
            tool("b", "B", "Code", 6.0, "active"),
        ]
    }));
    let ids: Vec<String> = engine
        .generate(&snap.tools, &snap.goals, &snap.decisions)
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec!["high-spend", "no-free-tools", "overlap-Code"]);
}

#[test]
fn test_insight_json_shape() {
    let insights = run(&Snapshot::default());
    let value = serde_json::to_value(&insights).unwrap();
    assert_eq!(
        value,
        json!([{
            "id": "welcome",
            "type": "info",
            "title": insights[0].title,
            "description": insights[0].description,
            "category": "tools"
        }])
    );
}
