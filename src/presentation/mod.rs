//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Choosing and building the notification sink
//! - Logging setup (stderr only; stdout carries notifications)

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use factory::create_sink;
pub use output::resolve_format;
