//! JSON graph exporter
//!
//! Emits `{nodes, edges, eligible}` with nodes as `{id, label, status, level}`
//! and edges as `{from, to, kind}`, for front ends that draw their own graph.

use crate::core::models::ProgressionGraph;
use crate::core::report::GraphReporter;
use std::error::Error;

/// JSON graph exporter
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    /// Create a pretty-printing JSON exporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Create an exporter writing everything on one line
    #[must_use]
    pub const fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphReporter for JsonReporter {
    fn render(&self, graph: &ProgressionGraph<'_>) -> Result<String, Box<dyn Error>> {
        let json = if self.pretty {
            serde_json::to_string_pretty(graph)?
        } else {
            serde_json::to_string(graph)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Catalog, Course};
    use crate::core::planner::{build_progression_graph, parse_completed, GraphOptions};

    #[test]
    fn test_json_shape() {
        let catalog: Catalog = [
            Course::new("CMPSC 131", "Programming I".to_string(), Some(3.0)),
            Course::new("CMPSC 132", "Programming II".to_string(), Some(3.0))
                .with_prerequisite_group(["CMPSC 131"]),
        ]
        .into_iter()
        .collect();
        let graph = build_progression_graph(&catalog, &parse_completed("CMPSC 131"), &GraphOptions::default());

        let json: serde_json::Value =
            serde_json::from_str(&JsonReporter::compact().render(&graph).unwrap()).unwrap();
        assert_eq!(json["nodes"][0]["id"], "CMPSC 131");
        assert_eq!(json["nodes"][0]["status"], "completed");
        assert_eq!(json["nodes"][1]["level"], 100);
        assert_eq!(json["edges"][0]["kind"], "prereq");
        assert_eq!(json["eligible"][0]["code"], "CMPSC 132");
        assert_eq!(json["eligible"][0]["prereq_groups"][0][0], "CMPSC 131");
    }
}
