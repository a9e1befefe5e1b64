//! Integration tests for the logging system
//!
//! Run with: cargo test --test logging_integration_tests

use frustum_3d_engine::frustum3d::camera::{build_frustum_line, Camera};
use frustum_3d_engine::frustum3d::log::{Logger, LogEntry, LogSeverity};
use frustum_3d_engine::frustum3d::Engine;
use frustum_3d_engine::glam::DVec3;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    Engine::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Engine::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[1].message, "Test warning message");
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_line_build_is_traced() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Trace);

    build_frustum_line(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO).unwrap();

    {
        let captured = entries.lock().unwrap();
        assert!(captured.iter().any(|e| e.severity == LogSeverity::Trace
            && e.source == "frustum3d::FrustumSolver"
            && e.message.starts_with("Line built")));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_errors_are_returned_not_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_min_severity(LogSeverity::Trace);

    let camera = Camera::new(DVec3::ZERO, DVec3::ZERO);
    assert!(camera.frustum_line().is_err());
    assert!(camera.frustum_edges(10.0, 10.0).is_err());

    assert!(entries.lock().unwrap().is_empty());

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_integration_trace_hidden_at_default_severity() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);

    build_frustum_line(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO).unwrap();
    assert!(entries.lock().unwrap().is_empty());

    Engine::reset_logger();
}
