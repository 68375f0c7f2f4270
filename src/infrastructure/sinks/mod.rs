//! Notification sinks
//!
//! - `TextSink`: the same line `Notifier::notify` prints
//! - `JsonSink`: one NDJSON object per notification

pub mod json;
pub mod text;

pub use json::JsonSink;
pub use text::TextSink;

use std::io::Write;
use std::sync::Mutex;

/// Shared writer behind a mutex so sinks can be `Sync`.
pub(crate) type SharedWriter = Mutex<Box<dyn Write + Send>>;

/// Write one line and flush. Failures are logged, never returned.
pub(crate) fn write_line(writer: &SharedWriter, line: &str) {
    let Ok(mut writer) = writer.lock() else {
        tracing::warn!("notification writer lock poisoned; dropping line");
        return;
    };
    if let Err(err) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
        tracing::warn!(error = %err, "failed to write notification");
    }
}
