//! Report generation module for course planning
//!
//! This module renders planning results for people: course listings and
//! requirement groups as text, and the progression graph in several export
//! formats with Mermaid visualizations.

pub mod formats;
pub mod listing;
pub mod visualization;

use crate::core::models::ProgressionGraph;
use std::error::Error;
use std::fs;
use std::path::Path;

pub use formats::{GraphFormat, JsonReporter, MarkdownReporter, MermaidReporter, TextReporter};
pub use listing::{course_detail, course_line, format_credits, format_group, format_groups, render_by_level};
pub use visualization::MermaidGenerator;

/// Trait for progression graph exporters
pub trait GraphReporter {
    /// Generate graph content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, graph: &ProgressionGraph<'_>) -> Result<String, Box<dyn Error>>;

    /// Generate the graph to a file, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering or file writing fails
    fn generate(&self, graph: &ProgressionGraph<'_>, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(graph)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(output_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};
    use crate::core::planner::{build_progression_graph, parse_completed, GraphOptions};

    #[test]
    fn test_generate_writes_file() {
        let catalog: Catalog = [Course::new("CMPSC 131", "Programming I".to_string(), Some(3.0))]
            .into_iter()
            .collect();
        let graph = build_progression_graph(&catalog, &parse_completed(""), &GraphOptions::default());

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out").join("graph.mmd");
        GraphFormat::Mermaid.reporter().generate(&graph, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("CMPSC_131"));
        assert!(written.contains("class CMPSC_131 eligible"));
    }
}
