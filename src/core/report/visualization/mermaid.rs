//! Mermaid diagram generator for progression graphs
//!
//! Generates Mermaid flowchart syntax that can be saved as a `.mmd` file or
//! embedded in Markdown and rendered by GitHub, GitLab, and other viewers.

use crate::core::models::{EdgeKind, GraphNode, NodeStatus, ProgressionGraph};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a bare Mermaid flowchart from a progression graph
    ///
    /// Nodes are styled by status. Prerequisite links are solid arrows and
    /// concurrent links dashed arrows, both pointing at the dependent course.
    #[must_use]
    pub fn generate_graph(graph: &ProgressionGraph<'_>) -> String {
        let mut output = String::from("flowchart LR\n");

        for node in &graph.nodes {
            let safe_id = Self::sanitize_id(&node.id);
            let _ = writeln!(output, "    {safe_id}[\"{}\"]", Self::node_label(node));
        }

        if !graph.edges.is_empty() {
            output.push('\n');
        }
        for edge in &graph.edges {
            let from = Self::sanitize_id(&edge.from);
            let to = Self::sanitize_id(&edge.to);
            let arrow = match edge.kind {
                EdgeKind::Prereq => "-->",
                EdgeKind::Concurrent => "-.->",
            };
            let _ = writeln!(output, "    {from} {arrow} {to}");
        }

        output.push('\n');
        for status in [NodeStatus::Completed, NodeStatus::Eligible, NodeStatus::Locked] {
            let _ = writeln!(output, "    classDef {status} {}", Self::class_style(status));
        }
        for node in &graph.nodes {
            let _ = writeln!(output, "    class {} {}", Self::sanitize_id(&node.id), node.status);
        }

        output
    }

    /// Generate the flowchart wrapped in a Markdown code fence
    #[must_use]
    pub fn generate_markdown(graph: &ProgressionGraph<'_>) -> String {
        format!("```mermaid\n{}```\n", Self::generate_graph(graph))
    }

    /// Code and title on separate lines, with quotes made safe for Mermaid
    fn node_label(node: &GraphNode) -> String {
        node.label.replace('"', "#quot;").replace('\n', "<br/>")
    }

    const fn class_style(status: NodeStatus) -> &'static str {
        match status {
            NodeStatus::Completed => "fill:#d4edda,stroke:#28a745",
            NodeStatus::Eligible => "fill:#cce5ff,stroke:#007bff",
            NodeStatus::Locked => "fill:#eeeeee,stroke:#999999,color:#666666",
        }
    }

    /// Sanitize a course code for use as a Mermaid node ID
    fn sanitize_id(code: &str) -> String {
        code.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
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
            Course::new("CMPSC 132", "Programming \"II\"".to_string(), Some(3.0))
                .with_prerequisite_group(["CMPSC 131"]),
            Course::new("MATH 140", "Calculus I".to_string(), Some(4.0)),
            Course::new("MATH 141", "Calculus II".to_string(), Some(4.0))
                .with_concurrent_group(["MATH 140"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mermaid_generation() {
        let catalog = catalog();
        let graph = build_progression_graph(&catalog, &parse_completed("CMPSC 131"), &GraphOptions::default());
        let diagram = MermaidGenerator::generate_graph(&graph);

        assert!(diagram.starts_with("flowchart LR\n"));
        assert!(diagram.contains("    CMPSC_131[\"CMPSC 131<br/>Programming I\"]"));
        assert!(diagram.contains("Programming #quot;II#quot;"));
        assert!(diagram.contains("    CMPSC_131 --> CMPSC_132"));
        assert!(diagram.contains("    MATH_140 -.-> MATH_141"));
        assert!(diagram.contains("    class CMPSC_131 completed"));
        assert!(diagram.contains("    class MATH_141 eligible"));
        assert!(diagram.contains("classDef locked"));
    }

    #[test]
    fn test_markdown_fence() {
        let catalog = catalog();
        let graph = build_progression_graph(&catalog, &parse_completed(""), &GraphOptions::default());
        let markdown = MermaidGenerator::generate_markdown(&graph);

        assert!(markdown.starts_with("```mermaid\nflowchart LR\n"));
        assert!(markdown.ends_with("```\n"));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(MermaidGenerator::sanitize_id("CMPSC 131"), "CMPSC_131");
        assert_eq!(MermaidGenerator::sanitize_id("MATH 140H"), "MATH_140H");
    }
}
