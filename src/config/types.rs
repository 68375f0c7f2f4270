//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::domain::ports::Notifier;
use crate::domain::value_objects::Recipient;
use crate::error::NotifierResult;

use super::loader;

/// Output format for notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per notification
    #[default]
    Text,
    /// NDJSON, one object per notification
    Json,
}

impl OutputFormat {
    /// Parse a user-supplied format name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    /// Who to notify, in order. Empty means run the demo sequence.
    #[serde(default)]
    pub recipients: Vec<Recipient>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NotifierResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Validate the recipients and build one notifier per entry.
    pub fn roster(&self) -> NotifierResult<Vec<Box<dyn Notifier>>> {
        self.recipients
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, recipient)| recipient.into_notifier(index))
            .collect()
    }
}
