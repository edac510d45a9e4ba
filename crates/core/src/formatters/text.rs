use crate::Result;
use crate::summary::Summary;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// List every link under its category instead of only the counts
    pub list_links: bool,
}

/// Plain text formatter for human-readable summaries
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, summary: &Summary) -> Result<String> {
        convert_to_text(summary, &self.config)
    }
}

/// Convert a summary to plain text with specified configuration
pub fn convert_to_text(summary: &Summary, config: &TextConfig) -> Result<String> {
    let mut output = generate_header(summary);
    output.push('\n');

    writeln!(output, "HTML version: {}", summary.version()).ok();
    writeln!(output, "Login form:   {}", if summary.has_login_form() { "yes" } else { "no" }).ok();
    output.push('\n');

    output.push_str("Headers\n");
    if summary.header_counts().is_empty() {
        output.push_str("  (none)\n");
    }
    for (tag, count) in summary.header_counts() {
        writeln!(output, "  {}: {}", tag, count).ok();
    }
    output.push('\n');

    output.push_str("Links\n");
    write_links(&mut output, "internal", summary.internal_links(), config.list_links);
    write_links(&mut output, "external", summary.external_links(), config.list_links);
    write_links(&mut output, "inaccessible", summary.inaccessible_links(), config.list_links);

    Ok(output.trim_end().to_string())
}

/// Title underlined, followed by the analysed URL
fn generate_header(summary: &Summary) -> String {
    let mut header = String::new();
    let title = summary.title().map(str::trim).filter(|t| !t.is_empty()).unwrap_or("(untitled)");

    header.push_str(title);
    header.push('\n');
    header.push_str(&"=".repeat(title.chars().count()));
    header.push('\n');
    header.push_str(summary.source_url().as_str());
    header.push('\n');

    header
}

fn write_links(output: &mut String, label: &str, links: &BTreeSet<String>, list: bool) {
    writeln!(output, "  {}: {}", label, links.len()).ok();
    if list {
        for link in links {
            writeln!(output, "    - {}", link).ok();
        }
    }
}
