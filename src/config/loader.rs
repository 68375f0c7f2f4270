//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NotifierError, NotifierResult};

use super::types::{Config, OutputFormat};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Dotted path of the unknown key (e.g. `recipients.0.phone`)
    pub key: String,
    pub file: PathBuf,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> NotifierResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| NotifierError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            key,
            file: path.to_path_buf(),
        })
        .collect();

    debug!(path = %path.display(), "loaded config");
    Ok((config, warnings))
}

/// Load from the given file, or fall back to defaults when no file is given.
///
/// Environment overrides are applied either way.
pub fn load_or_default(path: Option<&Path>) -> NotifierResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match path {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply `NOTIFIER_*` environment variables on top of a loaded config.
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// - `NOTIFIER_FORMAT`: `text` or `json`; other values are ignored
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("NOTIFIER_FORMAT") {
        match OutputFormat::parse(&value) {
            Some(format) => config.format = format,
            None => debug!(value = %value, "ignoring unrecognised NOTIFIER_FORMAT"),
        }
    }

    config
}
