//! Application telemetry events and sinks.
//!
//! The dashboard is a local-first tool, but it still benefits from
//! lightweight telemetry to support debugging and to capture operational
//! signals such as triggered reviews.

use std::io;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records a completed trigger-review request.
    ReviewTriggered {
        /// Pull request the review ran against.
        pull_request_id: u64,
        /// Number of issues the re-analysis discovered.
        issues: u64,
    },
    /// Records a completed data refresh for one route.
    RouteRefreshed {
        /// Display label of the refreshed route.
        route: String,
        /// Number of entities the refresh returned.
        entities: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
///
/// This is intended for local debugging and is not transmitted anywhere.
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Process-wide sink used by [`record`].
static SINK: OnceLock<Box<dyn TelemetrySink>> = OnceLock::new();

/// Installs the process-wide telemetry sink.
///
/// Returns `true` if the sink was installed, `false` if one was already
/// installed (the existing sink is kept).
pub fn install_sink(sink: Box<dyn TelemetrySink>) -> bool {
    SINK.set(sink).is_ok()
}

/// Records an event through the installed sink.
///
/// Events recorded before a sink is installed are dropped.
pub fn record(event: TelemetryEvent) {
    if let Some(sink) = SINK.get() {
        sink.record(event);
    }
}
