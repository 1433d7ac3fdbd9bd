//! Markdown, Mermaid and plain-text graph exporters
//!
//! The Markdown report lists the eligible courses by level and embeds the
//! progression diagram, so it renders well in GitHub, GitLab, and VS Code.

use crate::core::models::{NodeStatus, ProgressionGraph};
use crate::core::planner::levels::group_by_level;
use crate::core::report::listing::{course_line, level_heading};
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::GraphReporter;
use std::error::Error;
use std::fmt::Write;

/// Markdown report with an embedded Mermaid diagram
pub struct MarkdownReporter {
    title: String,
}

impl MarkdownReporter {
    /// Create a Markdown reporter with the default title
    #[must_use]
    pub fn new() -> Self {
        Self::with_title("Course Progression")
    }

    /// Create a Markdown reporter with a custom title
    #[must_use]
    pub fn with_title(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }

    fn render_document(&self, graph: &ProgressionGraph<'_>) -> String {
        let mut output = format!("# {}\n\n", self.title);

        let count = |status: NodeStatus| graph.nodes.iter().filter(|n| n.status == status).count();
        let _ = writeln!(output, "| Status | Courses |");
        let _ = writeln!(output, "|--------|---------|");
        for status in [NodeStatus::Completed, NodeStatus::Eligible, NodeStatus::Locked] {
            let _ = writeln!(output, "| {status} | {} |", count(status));
        }

        output.push_str("\n## Eligible this term\n\n");
        if graph.eligible.is_empty() {
            output.push_str("_No eligible courses._\n");
        }
        for (level, courses) in group_by_level(&graph.eligible) {
            let _ = writeln!(output, "### {}\n", level_heading(level));
            for course in courses {
                let _ = writeln!(output, "- {}", course_line(course));
            }
            output.push('\n');
        }

        output.push_str("\n## Progression graph\n\n");
        output.push_str(&MermaidGenerator::generate_markdown(graph));
        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReporter for MarkdownReporter {
    fn render(&self, graph: &ProgressionGraph<'_>) -> Result<String, Box<dyn Error>> {
        Ok(self.render_document(graph))
    }
}

/// Bare Mermaid flowchart, suitable for `.mmd` files
pub struct MermaidReporter;

impl GraphReporter for MermaidReporter {
    fn render(&self, graph: &ProgressionGraph<'_>) -> Result<String, Box<dyn Error>> {
        Ok(MermaidGenerator::generate_graph(graph))
    }
}

/// Human-readable node list
pub struct TextReporter;

impl GraphReporter for TextReporter {
    fn render(&self, graph: &ProgressionGraph<'_>) -> Result<String, Box<dyn Error>> {
        Ok(graph.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};
    use crate::core::planner::{build_progression_graph, parse_completed, GraphOptions};

    fn catalog() -> Catalog {
        [
            Course::new("CMPSC 131", "Programming I".to_string(), Some(3.0)),
            Course::new("CMPSC 132", "Programming II".to_string(), Some(3.0))
                .with_prerequisite_group(["CMPSC 131"]),
            Course::new("CMPSC 221", "Object-Oriented Programming".to_string(), Some(3.0))
                .with_prerequisite_group(["CMPSC 132"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_markdown_document() {
        let catalog = catalog();
        let graph = build_progression_graph(&catalog, &parse_completed("CMPSC 131"), &GraphOptions::default());
        let doc = MarkdownReporter::with_title("CMPSC").render(&graph).unwrap();

        assert!(doc.starts_with("# CMPSC\n"));
        assert!(doc.contains("| completed | 1 |"));
        assert!(doc.contains("| eligible | 1 |"));
        assert!(doc.contains("### 100-level"));
        assert!(doc.contains("- CMPSC 132 - Programming II (3 cr)"));
        assert!(doc.contains("```mermaid"));
    }

    #[test]
    fn test_markdown_without_eligible() {
        let catalog = Catalog::new();
        let graph = build_progression_graph(&catalog, &parse_completed(""), &GraphOptions::default());
        let doc = MarkdownReporter::new().render(&graph).unwrap();
        assert!(doc.contains("_No eligible courses._"));
    }

    #[test]
    fn test_text_and_mermaid_reporters() {
        let catalog = catalog();
        let graph = build_progression_graph(&catalog, &parse_completed("CMPSC 131"), &GraphOptions::default());

        let text = TextReporter.render(&graph).unwrap();
        assert!(text.contains("[eligible] CMPSC 132 ← CMPSC 131"));

        let mermaid = MermaidReporter.render(&graph).unwrap();
        assert!(mermaid.starts_with("flowchart LR"));
    }
}
