use crate::Result;
use crate::summary::Summary;

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Convert a summary to JSON
///
/// Link sets serialize as sorted arrays and header counts as an object keyed
/// by tag name, so the same page always produces the same document.
pub fn convert_to_json(summary: &Summary, config: &JsonConfig) -> Result<String> {
    if config.pretty { Ok(serde_json::to_string_pretty(summary)?) } else { Ok(serde_json::to_string(summary)?) }
}

/// Convert a summary to a `serde_json::Value`
pub fn summary_to_value(summary: &Summary) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(summary)?)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, summary: &Summary) -> Result<String> {
        convert_to_json(summary, &self.config)
    }
}
