//! Telemetry sink
//!
//! Fire-and-forget event reporting. Sinks never surface errors to the
//! caller; a failing sink must not affect the operation that emitted the
//! event.

use serde_json::Value;

/// Destination for application events
pub trait TelemetrySink: Send + Sync {
    /// Record a single event with structured details
    fn log_event(&self, action: &str, details: Value);
}

/// Sink that prints timestamped events to stderr
pub struct StderrSink;

impl TelemetrySink for StderrSink {
    fn log_event(&self, action: &str, details: Value) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        eprintln!("[{timestamp}] {action}: {details}");
    }
}

/// Sink that discards every event
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn log_event(&self, _action: &str, _details: Value) {}
}
