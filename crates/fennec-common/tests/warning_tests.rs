//! Integration tests for the warning registry.

use fennec_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    warn_once("Test", "recorded message");
    assert!(has_warned("Test", "recorded message"));
    assert!(!has_warned("Test", "some other message"));
}

#[test]
fn test_messages_are_scoped_by_component() {
    warn_once("Parser", "scoped message");
    assert!(has_warned("Parser", "scoped message"));
    assert!(!has_warned("XPath", "scoped message"));
}

#[test]
fn test_repeated_warning_is_idempotent() {
    warn_once("Test", "repeated message");
    warn_once("Test", "repeated message");
    assert!(has_warned("Test", "repeated message"));
}
