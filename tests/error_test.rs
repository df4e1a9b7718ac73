//! Tests for error types

use collab_ledger::Error;

#[test]
fn test_not_found_error() {
    let error = Error::NotFound {
        kind: "dataset",
        id: 999,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("dataset 999"));
    assert!(error_str.contains("not found"));
    assert_eq!(error.code(), Some(404));
}

#[test]
fn test_forbidden_error() {
    let error = Error::Forbidden {
        kind: "experiment",
        id: 2,
        caller: "user3".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("user3"));
    assert!(error_str.contains("experiment 2"));
    assert_eq!(error.code(), Some(403));
}

#[test]
fn test_unknown_operation_error() {
    let error = Error::UnknownOperation("drop-table".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Unknown method"));
    assert!(error_str.contains("drop-table"));
    assert_eq!(error.code(), None);
}

#[test]
fn test_invalid_arguments_error() {
    let error = Error::InvalidArguments("grant-access: invalid length 1".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid arguments"));
    assert_eq!(error.code(), Some(400));
}

#[test]
fn test_corrupt_snapshot_error() {
    let error = Error::CorruptSnapshot("dataset 1 appears twice".to_string());
    assert!(format!("{error}").contains("Corrupt snapshot"));
    assert_eq!(error.code(), None);
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_error_debug() {
    let error = Error::UnknownOperation("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("UnknownOperation"));
}
