//! Tests for the JSON-in/JSON-out planning surface.
//!
//! The exported functions are plain Rust functions on native targets, so
//! they can be exercised without a browser.

use digplan::wasm::{get_version, list_equipment, plan, simulate};

#[test]
fn test_plan_round_trip() {
    let response = plan(r#"{"selections": [{"id": "0", "quantity": 3}], "shovel_level": 4}"#);
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], true);
    assert!(value["materials"].as_array().map(|a| !a.is_empty()).unwrap_or(false));
    assert!(value["total_crafting_cost"].as_u64().unwrap_or(0) > 0);
}

#[test]
fn test_plan_malformed_input_fails_cleanly() {
    let response = plan("{nope");
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], false);
    assert!(value["error"].is_string());
}

#[test]
fn test_plan_unknown_id_fails_cleanly() {
    let response = plan(r#"{"selections": [{"id": "nonexistent"}]}"#);
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], false);
}

#[test]
fn test_simulate_reports_all_stats() {
    let response = simulate(r#"{"neck": "Lucky Necklace", "gear_level": "max"}"#);
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], true);
    let stats = value["stats"].as_object().expect("stats object");
    assert_eq!(stats.len(), 9);
    assert!(stats["luck"].as_f64().unwrap_or(0.0) > 0.0);
}

#[test]
fn test_simulate_per_slot_level_overrides_default() {
    let response = simulate(
        r#"{"neck": {"name": "Lucky Necklace", "level": "max"}, "gear_level": "min"}"#,
    );
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], true);
    // Max roll of "Luck: 3-5" is 5, despite the min default.
    assert_eq!(value["stats"]["luck"].as_f64(), Some(5.0));
}

#[test]
fn test_simulate_empty_request() {
    let response = simulate("{}");
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    assert_eq!(value["success"], true);
    assert!(value["recommendations"].as_array().is_some());
}

#[test]
fn test_list_equipment() {
    let response = list_equipment();
    let value: serde_json::Value = serde_json::from_str(&response).expect("valid JSON");
    let rows = value.as_array().expect("array of equipment");
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["name"].is_string() && r["id"].is_string()));
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}
