//! Progression graph model: nodes and labeled edges for visualization

use super::course::Course;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a course stands for the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Already taken
    Completed,
    /// Can be registered for this term
    Eligible,
    /// Requirements not yet met
    Locked,
}

impl NodeStatus {
    /// Lowercase name, as used in JSON and diagram class names
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Eligible => "eligible",
            Self::Locked => "locked",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which requirement an edge comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Requirement course must be completed first
    Prereq,
    /// Requirement course may be taken in the same term
    Concurrent,
}

impl EdgeKind {
    /// Lowercase name, as used in JSON
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prereq => "prereq",
            Self::Concurrent => "concurrent",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course in the progression graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Course code
    pub id: String,
    /// Display label: code and title on separate lines
    pub label: String,
    /// Completed / eligible / locked
    pub status: NodeStatus,
    /// Course level, 0 when unknown and clamped to 400
    pub level: u32,
}

/// A requirement relation: `from` is needed by `to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Required course
    pub from: String,
    /// Dependent course
    pub to: String,
    /// Prerequisite or concurrent
    pub kind: EdgeKind,
}

/// Result of building a progression graph
///
/// Every edge's endpoints are nodes of the same graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionGraph<'a> {
    /// Nodes ordered by course code
    pub nodes: Vec<GraphNode>,
    /// Edges between included nodes
    pub edges: Vec<GraphEdge>,
    /// Courses eligible this term (the same list `available_courses` returns)
    pub eligible: Vec<&'a Course>,
}

impl ProgressionGraph<'_> {
    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by course code
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Display for ProgressionGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Progression graph ({} courses, {} links):",
            self.nodes.len(),
            self.edges.len()
        )?;
        writeln!(f)?;

        for node in &self.nodes {
            let needs: Vec<String> = self
                .edges
                .iter()
                .filter(|e| e.to == node.id)
                .map(|e| match e.kind {
                    EdgeKind::Prereq => e.from.clone(),
                    EdgeKind::Concurrent => format!("{} (concurrent)", e.from),
                })
                .collect();

            if needs.is_empty() {
                writeln!(f, "  [{}] {}", node.status, node.id)?;
            } else {
                writeln!(f, "  [{}] {} ← {}", node.status, node.id, needs.join(", "))?;
            }
        }

        Ok(())
    }
}
