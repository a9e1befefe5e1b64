//! Unit tests for engine.rs
//!
//! The logger is process-wide, so every test here runs serially.

use crate::engine::Engine;
use crate::log::{Logger, LogEntry, LogSeverity};
use serial_test::serial;
use std::sync::{Arc, Mutex};

/// Keeps only entries from "frustum3d::test"; other unit tests may log concurrently.
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

fn install_capture_logger() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == "frustum3d::test" {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

// ============================================================================
// SEVERITY FILTER
// ============================================================================

#[test]
#[serial]
fn test_default_min_severity_is_info() {
    Engine::reset_logger();
    assert_eq!(Engine::min_severity(), LogSeverity::Info);
    assert!(!Engine::is_enabled(LogSeverity::Debug));
    assert!(Engine::is_enabled(LogSeverity::Warn));
}

#[test]
#[serial]
fn test_entries_below_min_severity_are_dropped() {
    let entries = install_capture_logger();
    Engine::set_min_severity(LogSeverity::Warn);

    Engine::log(LogSeverity::Info, "frustum3d::test", "dropped".to_string());
    Engine::log(LogSeverity::Warn, "frustum3d::test", "kept".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].message, "kept");
    }

    Engine::reset_logger();
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
#[serial]
fn test_macros_route_through_engine() {
    let entries = install_capture_logger();
    Engine::set_min_severity(LogSeverity::Trace);

    crate::engine_trace!("frustum3d::test", "trace {}", 1);
    crate::engine_debug!("frustum3d::test", "debug {}", 2);
    crate::engine_info!("frustum3d::test", "info {}", 3);
    crate::engine_warn!("frustum3d::test", "warn {}", 4);
    crate::engine_error!("frustum3d::test", "error {}", 5);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 5);
        assert_eq!(captured[0].severity, LogSeverity::Trace);
        assert_eq!(captured[0].message, "trace 1");
        assert!(captured[3].file.is_none());

        let error = &captured[4];
        assert_eq!(error.severity, LogSeverity::Error);
        assert_eq!(error.source, "frustum3d::test");
        assert!(error.file.unwrap().ends_with("engine_tests.rs"));
        assert!(error.line.is_some());
    }

    Engine::reset_logger();
}
