//! Configuration module for notifier
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NOTIFIER_*)
//! 3. Config file (`--config <PATH>`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
};
pub use types::{Config, OutputFormat};
