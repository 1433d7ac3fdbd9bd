//! Bounded-depth progression graph for visualization
//!
//! The graph is rooted at what the student has completed plus what they can
//! take now, and walks requirement links backwards a fixed number of rounds so
//! the picture shows where the eligible courses come from.

use crate::core::models::{
    display_level, Catalog, EdgeKind, GraphEdge, GraphNode, NodeStatus, ProgressionGraph,
};
use crate::core::planner::eligibility::{available_courses, normalize_completed};
use std::collections::{BTreeSet, HashSet};

/// Default number of expansion rounds
pub const DEFAULT_GRAPH_DEPTH: usize = 2;

/// Default node cap
pub const DEFAULT_GRAPH_MAX_NODES: usize = 220;

/// Bounds for [`build_progression_graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Number of breadth-first expansion rounds from the seed
    pub max_depth: usize,
    /// Maximum number of codes kept after sorting
    pub max_nodes: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_GRAPH_DEPTH,
            max_nodes: DEFAULT_GRAPH_MAX_NODES,
        }
    }
}

/// Build the progression graph for a student
///
/// 1. The seed is the completed set plus every course eligible this term.
/// 2. `max_depth` breadth-first rounds each replace the frontier with the
///    catalog courses its members depend on; visited codes accumulate.
/// 3. Seed, visited codes and the last frontier are sorted and cut to
///    `max_nodes`. Codes missing from the catalog (a completed course from
///    another department, say) are then dropped, so the node count never
///    exceeds the cap.
/// 4. Edges run from a requirement to the course needing it, only when both
///    ends are nodes. A code named in several groups of one requirement gives
///    a single edge.
///
/// The cut is purely alphabetical, so a large seed can push out the courses
/// that explain it.
#[must_use]
pub fn build_progression_graph<'a>(
    catalog: &'a Catalog,
    completed: &HashSet<String>,
    options: &GraphOptions,
) -> ProgressionGraph<'a> {
    let completed = normalize_completed(completed);
    let eligible = available_courses(catalog, &completed);
    let eligible_codes: HashSet<&str> = eligible.iter().copied().map(|c| c.code.as_str()).collect();

    let seed: BTreeSet<&str> = completed
        .iter()
        .map(String::as_str)
        .chain(eligible_codes.iter().copied())
        .collect();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut frontier = seed.clone();
    for _ in 0..options.max_depth {
        if frontier.is_empty() {
            break;
        }
        let mut next = BTreeSet::new();
        for code in frontier {
            if !seen.insert(code) {
                continue;
            }
            if let Some(course) = catalog.get(code) {
                next.extend(course.dependencies().into_iter().filter(|dep| catalog.contains(dep)));
            }
        }
        frontier = next;
    }

    let mut reached = seed;
    reached.extend(seen);
    reached.extend(frontier);
    let included: BTreeSet<&str> = reached
        .into_iter()
        .take(options.max_nodes)
        .filter(|code| catalog.contains(code))
        .collect();

    let nodes = included
        .iter()
        .filter_map(|code| catalog.get(code))
        .map(|course| {
            let status = if completed.contains(&course.code) {
                NodeStatus::Completed
            } else if eligible_codes.contains(course.code.as_str()) {
                NodeStatus::Eligible
            } else {
                NodeStatus::Locked
            };
            GraphNode {
                id: course.code.clone(),
                label: format!("{}\n{}", course.code, course.name),
                status,
                level: display_level(&course.code),
            }
        })
        .collect();

    let mut edges = Vec::new();
    for course in included.iter().filter_map(|code| catalog.get(code)) {
        let links = [
            (EdgeKind::Prereq, course.prerequisites.codes()),
            (EdgeKind::Concurrent, course.concurrent.codes()),
        ];
        for (kind, requirement_codes) in links {
            for from in requirement_codes {
                if included.contains(from) {
                    edges.push(GraphEdge {
                        from: from.to_string(),
                        to: course.code.clone(),
                        kind,
                    });
                }
            }
        }
    }

    ProgressionGraph {
        nodes,
        edges,
        eligible,
    }
}
