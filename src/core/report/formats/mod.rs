//! Graph export format implementations
//!
//! Provides exporters for the progression graph: plain text, JSON, a bare
//! Mermaid flowchart, and Markdown with an embedded diagram.

pub mod json;
pub mod markdown;

pub use json::JsonReporter;
pub use markdown::{MarkdownReporter, MermaidReporter, TextReporter};

use super::GraphReporter;
use std::fmt;
use std::str::FromStr;

/// Supported graph export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    /// Human-readable node list
    Text,
    /// Nodes, edges and eligible courses as JSON
    Json,
    /// Bare Mermaid flowchart
    Mermaid,
    /// Markdown with a fenced Mermaid diagram
    Markdown,
}

impl GraphFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Mermaid => "mmd",
            Self::Markdown => "md",
        }
    }

    /// The exporter for this format
    #[must_use]
    pub fn reporter(self) -> Box<dyn GraphReporter> {
        match self {
            Self::Text => Box::new(TextReporter),
            Self::Json => Box::new(JsonReporter::new()),
            Self::Mermaid => Box::new(MermaidReporter),
            Self::Markdown => Box::new(MarkdownReporter::new()),
        }
    }
}

impl FromStr for GraphFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "mermaid" | "mmd" => Ok(Self::Mermaid),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown graph format: {s}")),
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}
