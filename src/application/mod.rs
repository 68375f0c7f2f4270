//! Application Layer
//!
//! Use cases that drive notifiers through a sink.
//!
//! ## Use Cases
//!
//! - `dispatch` - Invoke `notify` on any notifier (stdout, no sink)
//! - `Dispatcher` - Send one or many notifiers to a `NotificationSink`
//! - `run_demo` - The user-then-admin sequence through a single rebound slot

pub mod dispatch;

pub use dispatch::{dispatch, run_demo, DispatchSummary, Dispatcher};
