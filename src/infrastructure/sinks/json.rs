//! JSON Sink
//!
//! Outputs notifications as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use super::{write_line, SharedWriter};
use crate::domain::ports::NotificationSink;
use crate::domain::value_objects::Notification;

/// One NDJSON line: `{"event":"notification", ...notification fields}`
#[derive(Serialize)]
struct NotificationEvent<'a> {
    event: &'static str,
    #[serde(flatten)]
    notification: &'a Notification,
}

/// Sink that outputs one JSON object per line
pub struct JsonSink {
    writer: SharedWriter,
}

impl JsonSink {
    /// Create a JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for JsonSink {
    fn deliver(&self, notification: &Notification) {
        let event = NotificationEvent {
            event: "notification",
            notification,
        };
        match serde_json::to_string(&event) {
            Ok(line) => write_line(&self.writer, &line),
            Err(err) => tracing::warn!(error = %err, "failed to encode notification"),
        }
    }
}
