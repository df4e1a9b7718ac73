//! Command Boundary Tests
//!
//! Drives the ledger through `Ledger::call` with method names and positional
//! JSON arguments, asserting on the wire-shaped results.

use collab_ledger::command::{CallResult, ErrorCode};
use collab_ledger::Ledger;
use serde_json::{json, Value};

fn call(ledger: &Ledger, method: &str, args: Value, sender: &str) -> CallResult {
    let args = match args {
        Value::Array(items) => items,
        other => panic!("args must be an array, got {other}"),
    };
    ledger.call(method, args, sender)
}

fn create_tokamak(ledger: &Ledger, sender: &str) -> CallResult {
    call(
        ledger,
        "create-experiment",
        json!([
            "Tokamak Optimization",
            "Improving plasma confinement",
            ["temperature", "magnetic field"]
        ]),
        sender,
    )
}

fn share_tokamak(ledger: &Ledger, sender: &str) -> CallResult {
    call(
        ledger,
        "share-dataset",
        json!([
            1,
            "Tokamak Experiment Results",
            "Data from recent plasma confinement test",
            "0x1234567890abcdef"
        ]),
        sender,
    )
}

// =============================================================================
// Experiments
// =============================================================================

#[test]
fn test_create_experiment() {
    let ledger = Ledger::new();
    let result = create_tokamak(&ledger, "user1");

    assert!(result.success);
    assert_eq!(result.value, Some(json!(1)));
}

#[test]
fn test_add_collaborator() {
    let ledger = Ledger::new();
    create_tokamak(&ledger, "user1");

    let result = call(&ledger, "add-collaborator", json!([1, "user2"]), "user1");
    assert!(result.success);
    assert_eq!(result.value, None);

    let denied = call(&ledger, "add-collaborator", json!([1, "user3"]), "user2");
    assert_eq!(denied.error, Some(ErrorCode::Code(403)));

    let missing = call(&ledger, "add-collaborator", json!([2, "user3"]), "user1");
    assert_eq!(missing.error, Some(ErrorCode::Code(404)));
}

#[test]
fn test_update_experiment_status() {
    let ledger = Ledger::new();
    create_tokamak(&ledger, "user1");

    let result = call(
        &ledger,
        "update-experiment-status",
        json!([1, "in-progress"]),
        "user1",
    );
    assert!(result.success);
}

#[test]
fn test_get_experiment() {
    let ledger = Ledger::new();
    create_tokamak(&ledger, "user1");

    let result = call(&ledger, "get-experiment", json!([1]), "anyone");

    assert!(result.success);
    assert_eq!(
        result.value,
        Some(json!({
            "lead_researcher": "user1",
            "title": "Tokamak Optimization",
            "description": "Improving plasma confinement",
            "parameters": ["temperature", "magnetic field"],
            "collaborators": ["user1"],
            "status": "proposed",
        }))
    );
}

#[test]
fn test_get_missing_experiment_is_absent() {
    let ledger = Ledger::new();
    let result = call(&ledger, "get-experiment", json!([5]), "anyone");

    assert!(result.success);
    assert_eq!(result.value, None);
}

#[test]
fn test_get_experiments_by_status() {
    let ledger = Ledger::new();
    create_tokamak(&ledger, "user1");
    call(
        &ledger,
        "create-experiment",
        json!([
            "Stellarator Design",
            "Enhancing magnetic field configuration",
            ["coil shape", "plasma pressure"]
        ]),
        "user2",
    );
    call(
        &ledger,
        "update-experiment-status",
        json!([2, "in-progress"]),
        "user2",
    );

    let result = call(&ledger, "get-experiments-by-status", json!(["proposed"]), "anyone");

    assert!(result.success);
    let entries = result.value.unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].get("1").is_some());
    assert_eq!(entries[0]["1"]["lead_researcher"], json!("user1"));
}

// =============================================================================
// Datasets
// =============================================================================

#[test]
fn test_share_dataset() {
    let ledger = Ledger::new();
    let result = share_tokamak(&ledger, "user1");

    assert!(result.success);
    assert_eq!(result.value, Some(json!(1)));
}

#[test]
fn test_grant_access() {
    let ledger = Ledger::new();
    share_tokamak(&ledger, "user1");

    let result = call(&ledger, "grant-access", json!([1, "user2"]), "user1");
    assert!(result.success);

    let denied = call(&ledger, "grant-access", json!([1, "user3"]), "user2");
    assert_eq!(denied.error, Some(ErrorCode::Code(403)));
}

#[test]
fn test_get_dataset() {
    let ledger = Ledger::new();
    share_tokamak(&ledger, "user1");

    let result = call(&ledger, "get-dataset", json!([1]), "anyone");

    assert!(result.success);
    assert_eq!(
        result.value,
        Some(json!({
            "owner": "user1",
            "experiment_id": 1,
            "title": "Tokamak Experiment Results",
            "description": "Data from recent plasma confinement test",
            "data_hash": "0x1234567890abcdef",
            "access_list": ["user1"],
        }))
    );
}

#[test]
fn test_has_access() {
    let ledger = Ledger::new();
    share_tokamak(&ledger, "user1");
    call(&ledger, "grant-access", json!([1, "user2"]), "user1");

    let granted = call(&ledger, "has-access", json!([1, "user2"]), "anyone");
    assert_eq!(granted.value, Some(json!(true)));

    let other = call(&ledger, "has-access", json!([1, "user3"]), "anyone");
    assert_eq!(other.value, Some(json!(false)));

    let missing = call(&ledger, "has-access", json!([999, "user2"]), "anyone");
    assert!(!missing.success);
    assert_eq!(missing.error, Some(ErrorCode::Code(404)));
}

#[test]
fn test_share_dataset_does_not_check_experiment() {
    let ledger = Ledger::new();
    let result = call(
        &ledger,
        "share-dataset",
        json!([-1, "Orphan", "No such experiment", ""]),
        "user1",
    );

    assert!(result.success);
    assert_eq!(ledger.datasets().get_dataset(1).unwrap().experiment_id(), -1);
}

// =============================================================================
// Boundary failures
// =============================================================================

#[test]
fn test_unknown_method() {
    let ledger = Ledger::new();
    let result = call(&ledger, "revoke-access", json!([1, "user2"]), "user1");

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": false, "error": "Unknown method"})
    );
}

#[test]
fn test_malformed_arguments_do_not_touch_state() {
    let ledger = Ledger::new();

    let result = call(&ledger, "create-experiment", json!(["only a title"]), "user1");
    assert_eq!(result.error, Some(ErrorCode::Code(400)));
    assert!(ledger.experiments().is_empty());

    // The failed call did not consume an id
    assert_eq!(create_tokamak(&ledger, "user1").value, Some(json!(1)));
}
