//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports.

pub mod sinks;

pub use sinks::{JsonSink, TextSink};
