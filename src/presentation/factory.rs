//! Sink Factory
//!
//! Picks the concrete `NotificationSink` for an output format.

use crate::domain::ports::NotificationSink;
use crate::infrastructure::{JsonSink, TextSink};

use super::output::OutputFormat;

/// Create a stdout sink for the given format
pub fn create_sink(format: OutputFormat) -> Box<dyn NotificationSink> {
    match format {
        OutputFormat::Text => Box::new(TextSink::stdout()),
        OutputFormat::Json => Box::new(JsonSink::stdout()),
    }
}
