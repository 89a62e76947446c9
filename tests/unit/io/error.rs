//! Tests for error types including source chaining and message formatting

use std::error::Error;

use tilecarve::io::error::{GenerationError, invalid_parameter};

#[test]
fn test_invalid_parameter_formatting() {
    let err = invalid_parameter("split_count", &0, &"at least one level required");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'split_count' = '0': at least one level required"
    );
}

#[test]
fn test_invariant_violations_name_their_subject() {
    let repair = GenerationError::UnreachableRooms { count: 3 };
    assert!(repair.to_string().contains("3 unreachable room"));

    let key = GenerationError::NoKeyBranch { street: 12 };
    assert!(key.to_string().contains("street 12"));
}

#[test]
fn test_io_errors_keep_their_sources() {
    let io_err = GenerationError::from(std::io::Error::other("disk gone"));
    assert!(matches!(io_err, GenerationError::FileSystem { .. }));
    assert!(io_err.source().is_some());
    assert!(io_err.to_string().contains("disk gone"));

    let invariant = GenerationError::UnreachableRooms { count: 1 };
    assert!(invariant.source().is_none());
}
