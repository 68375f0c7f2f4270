//! Notification Sink Port
//!
//! Receives notifications once they are built. Lets the dispatcher write
//! text, NDJSON, or nothing at all without knowing which.

use crate::domain::value_objects::Notification;

/// Trait for receiving notifications
///
/// Implementations:
/// - TextSink: one human-readable line per notification
/// - JsonSink: NDJSON stream for scripts
/// - NoopSink: discards everything
pub trait NotificationSink: Send + Sync {
    /// Handle a notification. Must not fail.
    fn deliver(&self, notification: &Notification);
}

/// Sink that drops every notification
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn deliver(&self, _notification: &Notification) {}
}
