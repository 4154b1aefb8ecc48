//! Output formatting for extracted information (JSON, table, markdown).

use crate::amazon::models::{AttributeTable, AttributeValue, TextualInfo};
use crate::config::OutputFormat;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Widest name column the table format pads to.
const MAX_KEY_WIDTH: usize = 40;

/// Serializes as JSON indented with four spaces.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Formats extraction results for the console.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats an attribute table.
    pub fn format_table(&self, table: &AttributeTable) -> String {
        if table.is_empty() && self.format != OutputFormat::Json {
            return "No attributes found.".to_string();
        }

        match self.format {
            OutputFormat::Json => to_json_pretty(table).unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Table => self.table_attributes(table),
            OutputFormat::Markdown => self.markdown_attributes(table),
        }
    }

    /// Formats title, bullet points and description.
    pub fn format_textual(&self, info: &TextualInfo) -> String {
        match self.format {
            OutputFormat::Json => to_json_pretty(info).unwrap_or_else(|_| "{}".to_string()),
            OutputFormat::Table => self.table_textual(info),
            OutputFormat::Markdown => self.markdown_textual(info),
        }
    }

    // Table formatting

    fn table_attributes(&self, table: &AttributeTable) -> String {
        let width =
            table.keys().map(|k| k.chars().count()).max().unwrap_or(0).min(MAX_KEY_WIDTH);

        let mut lines = Vec::new();
        for (key, value) in table.iter() {
            let key = truncate(key, MAX_KEY_WIDTH);
            match value {
                AttributeValue::Text(text) => {
                    lines.push(format!("{:<width$}  {}", key, text, width = width));
                }
                AttributeValue::Ranks(ranks) if ranks.is_empty() => {
                    lines.push(format!("{:<width$}  -", key, width = width));
                }
                AttributeValue::Ranks(ranks) => {
                    for (i, rank) in ranks.iter().enumerate() {
                        let label = if i == 0 { key.as_str() } else { "" };
                        lines.push(format!("{:<width$}  {}", label, rank, width = width));
                    }
                }
            }
        }

        lines.join("\n")
    }

    fn table_textual(&self, info: &TextualInfo) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Title:        {}", info.title));
        lines.push("Bullets:".to_string());
        for bullet in &info.bullet_points {
            lines.push(format!("  - {}", bullet));
        }
        lines.push(format!("Description:  {}", info.product_description));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_attributes(&self, table: &AttributeTable) -> String {
        let mut lines = Vec::new();

        lines.push("| Attribute | Value |".to_string());
        lines.push("|-----------|-------|".to_string());

        for (key, value) in table.iter() {
            let value = match value {
                AttributeValue::Text(text) => Self::markdown_escape(text),
                AttributeValue::Ranks(ranks) => ranks
                    .iter()
                    .map(|r| Self::markdown_escape(r))
                    .collect::<Vec<_>>()
                    .join("<br>"),
            };
            lines.push(format!("| {} | {} |", Self::markdown_escape(key), value));
        }

        lines.join("\n")
    }

    fn markdown_textual(&self, info: &TextualInfo) -> String {
        let mut lines = Vec::new();

        let title = if info.title.is_empty() { "Untitled product" } else { info.title.as_str() };
        lines.push(format!("## {}", title));
        lines.push(String::new());

        for bullet in info.bullet_points.iter().filter(|b| !b.is_empty()) {
            lines.push(format!("- {}", bullet));
        }

        if !info.product_description.is_empty() {
            lines.push(String::new());
            lines.push(info.product_description.clone());
        }

        lines.join("\n")
    }

    fn markdown_escape(s: &str) -> String {
        s.replace('|', "\\|").replace('\n', " ")
    }
}

/// Shortens to `max` characters, marking the cut with "...".
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
