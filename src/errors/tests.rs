//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::NoInputProvided, None);

    assert_eq!(error.get_error_name(), "NoInputProvided");
    assert_eq!(error.get_source_name(), None);
}

#[test]
fn test_error_source_name() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            reason: "No such file or directory".to_string(),
        },
        Some("missing.cpp".to_string()),
    );

    assert_eq!(error.get_source_name(), Some("missing.cpp"));
    assert_eq!(error.get_error_name(), "ReadFailed");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            reason: "denied".to_string(),
        },
        Some("a.cpp".to_string()),
    );

    assert_eq!(error.to_string(), "a.cpp: failed to read: denied");

    let error = Error::new(ErrorImpl::TooManyArguments { received: 3 }, None);
    assert_eq!(error.to_string(), "too many arguments: expected 1, received 3");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::ReadFailed {
            reason: "denied".to_string(),
        },
        None,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::NoInputProvided, None);

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Please select a file to process."),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_source_chain() {
    let error = Error::new(ErrorImpl::TooManyArguments { received: 2 }, None);
    let source = std::error::Error::source(&error).map(|e| e.to_string());

    assert_eq!(source.as_deref(), Some("too many arguments: expected 1, received 2"));
}
