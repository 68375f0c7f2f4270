//! notifier - capability-based notification dispatch
//!
//! A `User` and an `Admin` (which embeds a `User`) both implement the
//! `Notifier` capability. Callers hold them as `&dyn Notifier` and the
//! concrete type decides which message is sent.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{dispatch, run_demo, DispatchSummary, Dispatcher};
pub use config::{Config, OutputFormat};
pub use domain::entities::{Admin, User};
pub use domain::ports::{NoopSink, NotificationSink, Notifier};
pub use domain::value_objects::{Notification, NotificationKind, Recipient};
pub use error::{NotifierError, NotifierResult};
pub use infrastructure::{JsonSink, TextSink};
