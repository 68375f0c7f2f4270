//! Domain Ports (Interfaces)
//!
//! `Notifier` is the capability the record shapes implement.
//! `NotificationSink` is where finished notifications go; infrastructure
//! provides the concrete sinks.

pub mod notification_sink;
pub mod notifier;

pub use notification_sink::{NoopSink, NotificationSink};
pub use notifier::Notifier;
