//! Snapshot persistence through the filesystem

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use collab_ledger::snapshot::LedgerSnapshot;
use collab_ledger::Ledger;
use serde_json::json;

/// Unique temp file path, removed on drop even if the test panics first.
struct TempPath(PathBuf);

impl TempPath {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        Self(std::env::temp_dir().join(format!(
            "{prefix}_{}_{nanos}.json",
            std::process::id()
        )))
    }
}

impl Drop for TempPath {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

#[test]
fn test_snapshot_file_round_trip() {
    let ledger = Ledger::new();
    ledger.call(
        "create-experiment",
        vec![json!("Tokamak Optimization"), json!("Confinement"), json!(["temperature"])],
        "user1",
    );
    ledger.call("add-collaborator", vec![json!(1), json!("user2")], "user1");
    ledger.call(
        "share-dataset",
        vec![json!(1), json!("Results"), json!("Plasma"), json!("0x12")],
        "user1",
    );
    ledger.call("grant-access", vec![json!(1), json!("user2")], "user1");

    let path = TempPath::new("collab_ledger_snapshot");
    ledger.snapshot().save(&path.0).unwrap();

    let restored = Ledger::from_snapshot(LedgerSnapshot::load(&path.0).unwrap()).unwrap();

    assert_eq!(restored.snapshot(), ledger.snapshot());
    assert!(restored.datasets().has_access(1, "user2").unwrap());
    assert_eq!(
        restored.experiments().get_experiment(1).unwrap().collaborators(),
        ["user1", "user2"]
    );

    // Authorization survives the restore
    let denied = restored.call("grant-access", vec![json!(1), json!("user3")], "user2");
    assert!(!denied.success);
}

#[test]
fn test_load_missing_file() {
    let err = LedgerSnapshot::load("/nonexistent/collab-ledger.json").unwrap_err();
    assert!(matches!(err, collab_ledger::Error::Io(_)));
}

#[test]
fn test_temp_path_removed_on_drop() {
    let path = TempPath::new("collab_ledger_drop");
    Ledger::new().snapshot().save(&path.0).unwrap();
    let kept = path.0.clone();
    assert!(kept.exists());

    drop(path);
    assert!(!kept.exists());
}
