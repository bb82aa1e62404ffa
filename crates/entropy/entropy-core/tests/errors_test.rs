//! Tests for the error handling system.

use std::collections::HashSet;

use entropy_core::errors::*;

/// Every error enum exposes a non-empty code.
#[test]
fn test_all_errors_have_error_code() {
    let word = WordError::Empty;
    assert!(!word.error_code().is_empty());

    let snapshot = SnapshotError::InvalidLength {
        index: 0,
        expected: 128,
        actual: 0,
    };
    assert!(!snapshot.error_code().is_empty());

    let payload = PayloadError::InvalidUtf8("bad".into());
    assert!(!payload.error_code().is_empty());

    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert!(!config.error_code().is_empty());
}

/// Subsystem errors convert into WatchdogError and keep their codes.
#[test]
fn test_from_conversions_preserve_codes() {
    let snapshot = SnapshotError::InvalidLength {
        index: 1,
        expected: 128,
        actual: 3,
    };
    let code = snapshot.error_code();
    let top: WatchdogError = snapshot.into();
    assert!(matches!(top, WatchdogError::Snapshot(_)));
    assert_eq!(top.error_code(), code);

    let top: WatchdogError = ConfigError::ValidationFailed {
        field: "x".into(),
        message: "y".into(),
    }
    .into();
    assert_eq!(top.error_code(), "CONFIG_ERROR");

    let top: WatchdogError = PayloadError::Truncated { needed: 64, actual: 1 }.into();
    assert_eq!(top.error_code(), "PAYLOAD_DECODE_ERROR");

    let top: WatchdogError = WordError::Overflow("1".into()).into();
    assert_eq!(top.error_code(), "WORD_PARSE_ERROR");
}

/// Coded strings follow `[CODE] message`.
#[test]
fn test_coded_string_format() {
    let err = SnapshotError::InvalidLength {
        index: 2,
        expected: 128,
        actual: 64,
    };
    assert_eq!(
        err.coded_string(),
        "[SNAPSHOT_DECODE_ERROR] history entry 2 has 64 bytes, expected 128"
    );
}

/// Distinct subsystems use distinct codes.
#[test]
fn test_codes_are_distinct_per_subsystem() {
    let codes: HashSet<&str> = [
        WordError::Empty.error_code(),
        SnapshotError::InvalidLength {
            index: 0,
            expected: 1,
            actual: 0,
        }
        .error_code(),
        PayloadError::Truncated { needed: 1, actual: 0 }.error_code(),
        ConfigError::FileNotFound { path: String::new() }.error_code(),
    ]
    .into_iter()
    .collect();
    assert_eq!(codes.len(), 4);
}
