//! Output format selection

pub use crate::config::OutputFormat;

/// `--json` wins over whatever the config and environment chose.
pub fn resolve_format(configured: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        OutputFormat::Json
    } else {
        configured
    }
}
