//! Filesystem integration tests for `flat_file`.

use std::fs;

use flat_file::{FailurePolicy, FileSaver, SaveError};

#[test]
fn writes_full_payload_to_fresh_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");

    let saver = FileSaver::new(FailurePolicy::Propagate);
    saver.save(&path, &[0x41, 0x42, 0x43]).unwrap();

    assert_eq!(fs::read(&path).unwrap(), [0x41, 0x42, 0x43]);
}

#[test]
fn truncates_existing_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    fs::write(&path, b"a much longer pre-existing payload").unwrap();

    let saver = FileSaver::new(FailurePolicy::Propagate);
    saver.save(&path, b"short").unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"short");
}

#[test]
fn empty_payload_propagates_and_preserves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    fs::write(&path, b"precious").unwrap();

    let saver = FileSaver::new(FailurePolicy::Propagate);
    let result = saver.save(&path, &[]);

    assert!(matches!(result, Err(SaveError::EmptyPayload { .. })));
    assert_eq!(fs::read(&path).unwrap(), b"precious");
}

#[test]
fn empty_payload_with_log_policy_reports_success_and_preserves_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.bin");
    fs::write(&path, b"precious").unwrap();

    let saver = FileSaver::new(FailurePolicy::Log);
    let result = saver.save(&path, &[]);

    assert!(result.is_ok());
    assert_eq!(fs::read(&path).unwrap(), b"precious");
}

#[test]
fn directory_destination_is_an_open_error() {
    let dir = tempfile::tempdir().unwrap();

    let saver = FileSaver::new(FailurePolicy::Propagate);
    let result = saver.save(dir.path(), b"ABC");

    assert!(matches!(result, Err(SaveError::Open { .. })));
}

#[test]
fn saver_is_reusable_across_saves() {
    let dir = tempfile::tempdir().unwrap();
    let saver = FileSaver::new(FailurePolicy::Propagate);

    for name in ["first.bin", "second.bin"] {
        let path = dir.path().join(name);
        saver.save(&path, name.as_bytes()).unwrap();
        assert_eq!(fs::read(&path).unwrap(), name.as_bytes());
    }
}
