//! Renderer module
//!
//! Renders run reports to different output formats: text, json. Text output
//! is the human-readable per-file listing plus summary block; json is the
//! full report serialized with serde.

use serde::Serialize;

use crate::core::model::{CountReport, GatherReport};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
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
    #[allow(dead_code)]
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

/// A run report that can be rendered in every output format.
pub trait Report: Serialize {
    fn render_text(&self) -> String;
}

impl Report for CountReport {
    fn render_text(&self) -> String {
        let mut output = String::new();
        for file in &self.files {
            output.push_str(&file.path);
            output.push('\n');
            output.push_str(&format!("    {}\n", file.lines));
        }
        output.push_str(&format!("Total lines of code: {}\n", self.total_lines));
        output.push_str(&format!("Total files: {}\n", self.total_files));
        output.push_str(&format!("Total images: {}", self.total_images));
        output
    }
}

impl Report for GatherReport {
    fn render_text(&self) -> String {
        format!(
            "All {} files have been combined and cleaned into {}\n\
             Total files processed: {}\n\
             Total images found: {}",
            self.target, self.output, self.total_files, self.total_images
        )
    }
}

/// Renderer for run reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render<R: Report>(&self, report: &R) -> String {
        match self.config.format {
            OutputFormat::Text => report.render_text(),
            OutputFormat::Json => {
                if self.config.pretty {
                    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
                } else {
                    serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
                }
            }
        }
    }
}
