//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.
//! The global slot is covered by tests/logging_integration_tests.rs.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "particle_octree::Octree".to_string(),
        message: "split node".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_debug() {
    assert_eq!(format!("{:?}", LogSeverity::Trace), "Trace");
    assert_eq!(format!("{:?}", LogSeverity::Error), "Error");
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_clone() {
    let entry1 = entry(LogSeverity::Warn, Some("octree.rs"), Some(10));
    let entry2 = entry1.clone();

    assert_eq!(entry1.severity, entry2.severity);
    assert_eq!(entry1.source, entry2.source);
    assert_eq!(entry1.message, entry2.message);
    assert_eq!(entry1.file, entry2.file);
    assert_eq!(entry1.line, entry2.line);
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_threshold_is_info() {
    assert_eq!(DefaultLogger::new().min_severity(), LogSeverity::Info);
    assert_eq!(DefaultLogger::default().min_severity(), LogSeverity::Info);
}

#[test]
fn test_default_logger_custom_threshold() {
    let logger = DefaultLogger::with_min_severity(LogSeverity::Trace);
    assert_eq!(logger.min_severity(), LogSeverity::Trace);

    // Just verify it doesn't panic
    logger.log(&entry(LogSeverity::Trace, None, None));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger::new();
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        logger.log(&entry(severity, None, None));
    }
}

#[test]
fn test_format_entry_without_location() {
    colored::control::set_override(false);
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Info, None, None));

    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[particle_octree::Octree]"));
    assert!(line.ends_with("split node"));
}

#[test]
fn test_format_entry_with_location() {
    colored::control::set_override(false);
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Error, Some("octree.rs"), Some(42)));

    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("split node (octree.rs:42)"));
}

#[test]
fn test_default_logger_enabled_follows_threshold() {
    let logger = DefaultLogger::new();
    assert!(!logger.enabled(LogSeverity::Trace));
    assert!(!logger.enabled(LogSeverity::Debug));
    assert!(logger.enabled(LogSeverity::Info));
    assert!(logger.enabled(LogSeverity::Error));

    let verbose = DefaultLogger::with_min_severity(LogSeverity::Trace);
    assert!(verbose.enabled(LogSeverity::Trace));
}
