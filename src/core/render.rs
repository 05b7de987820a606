//! Renderer module
//!
//! Renders ResultSet to different output formats: lines, jsonl, json, md

use crate::core::model::{Kind, ResultItem, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path (or text) per line
    #[default]
    Lines,
    Jsonl,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "plain" | "text" => Ok(OutputFormat::Lines),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Lines => self.render_lines(result_set),
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
        }
    }

    /// Render and print to stdout; prints nothing for an empty line listing
    pub fn print(&self, result_set: &ResultSet) {
        let output = self.render(result_set);
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    /// Render one item per line
    fn render_lines(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(ResultItem::display_line)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let sections = [
            (Kind::Header, "Headers"),
            (Kind::Include, "User Includes"),
            (Kind::System, "System Includes"),
            (Kind::Timestamp, "Latest Modification"),
        ];

        for (kind, title) in sections {
            let items: Vec<_> = result_set
                .items
                .iter()
                .filter(|item| item.kind == kind)
                .collect();
            if items.is_empty() {
                continue;
            }

            output.push_str(&format!("## {}\n\n", title));
            for item in items {
                self.render_item_md(&mut output, item);
            }
            output.push('\n');
        }

        output
    }

    fn render_item_md(&self, output: &mut String, item: &ResultItem) {
        match (&item.path, &item.text) {
            (Some(path), Some(text)) => output.push_str(&format!("- {} (`{}`)\n", text, path)),
            (Some(path), None) => output.push_str(&format!("- `{}`\n", path)),
            (None, Some(text)) => output.push_str(&format!("- `{}`\n", text)),
            (None, None) => {}
        }
    }
}
