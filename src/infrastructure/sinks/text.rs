//! Text Sink
//!
//! Writes each notification as its human-readable line.

use std::io::{self, Write};
use std::sync::Mutex;

use super::{write_line, SharedWriter};
use crate::domain::ports::NotificationSink;
use crate::domain::value_objects::Notification;

/// Sink that writes one text line per notification
pub struct TextSink {
    writer: SharedWriter,
}

impl TextSink {
    /// Create a text sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a text sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl NotificationSink for TextSink {
    fn deliver(&self, notification: &Notification) {
        write_line(&self.writer, notification.message());
    }
}
