//! Invariant checks over every completed subset of a slice of the sample catalog

use course_planner::models::{Catalog, Course};
use course_planner::planner::{
    available_courses, build_progression_graph, can_take_this_term, explain, GraphOptions,
};
use std::collections::{BTreeSet, HashSet};

/// Courses whose completion drives most of the sample catalog
const DRIVERS: [&str; 8] = [
    "CMPSC 121",
    "CMPSC 131",
    "CMPSC 132",
    "CMPSC 360",
    "CMPSC 465",
    "MATH 140",
    "MATH 141",
    "PHYS 211",
];

fn sample_catalog() -> Catalog {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/catalogs/cmpsc_catalog.json");
    Catalog::load_json(path).expect("sample catalog loads")
}

/// All 256 subsets of the driver courses
fn completed_sets() -> Vec<HashSet<String>> {
    (0u32..1 << DRIVERS.len())
        .map(|mask| {
            DRIVERS
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, code)| (*code).to_string())
                .collect()
        })
        .collect()
}

fn code_set(courses: &[&Course]) -> BTreeSet<String> {
    courses.iter().map(|c| c.code.clone()).collect()
}

#[test]
fn eligibility_is_deterministic_and_sorted() {
    let catalog = sample_catalog();
    for completed in completed_sets() {
        let first = available_courses(&catalog, &completed);
        let second = available_courses(&catalog, &completed);
        assert_eq!(first, second);

        let codes: Vec<&str> = first.iter().map(|c| c.code.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted, "result must be sorted for {completed:?}");
    }
}

#[test]
fn eligibility_ignores_input_spelling() {
    let catalog = sample_catalog();
    for completed in completed_sets() {
        let messy: HashSet<String> = completed
            .iter()
            .map(|c| format!("  {}  ", c.to_lowercase().replace(' ', "\u{a0}")))
            .collect();
        assert_eq!(
            code_set(&available_courses(&catalog, &completed)),
            code_set(&available_courses(&catalog, &messy))
        );
    }
}

#[test]
fn eligible_set_is_the_fixed_point() {
    let catalog = sample_catalog();
    for completed in completed_sets() {
        let planned = code_set(&available_courses(&catalog, &completed));

        for course in catalog.courses() {
            if completed.contains(&course.code) {
                assert!(!planned.contains(&course.code), "completed course listed as eligible");
                continue;
            }
            let passes = can_take_this_term(course, &completed, &planned);
            assert_eq!(
                passes,
                planned.contains(&course.code),
                "{} disagrees with the planned set for {completed:?}",
                course.code
            );
        }
    }
}

#[test]
fn completing_more_never_locks_a_course() {
    let catalog = sample_catalog();
    for completed in completed_sets() {
        let before = code_set(&available_courses(&catalog, &completed));
        for extra in DRIVERS {
            let mut more = completed.clone();
            more.insert(extra.to_string());
            let after = code_set(&available_courses(&catalog, &more));
            for code in &before {
                assert!(
                    code == extra || after.contains(code),
                    "completing {extra} locked {code} (from {completed:?})"
                );
            }
        }
    }
}

#[test]
fn missing_prerequisites_mean_not_eligible() {
    let catalog = sample_catalog();
    for completed in completed_sets() {
        let planned = code_set(&available_courses(&catalog, &completed));
        for course in catalog.courses() {
            let explanation = explain(&catalog, &course.code, &completed).expect("course exists");
            if !explanation.missing_prerequisites.is_empty() {
                assert!(!planned.contains(&course.code));
            }
            if course.prerequisites.is_satisfied_by(&completed) {
                assert!(explanation.missing_prerequisites.is_empty());
            }
        }
    }
}

#[test]
fn graph_is_closed_and_bounded() {
    let catalog = sample_catalog();
    let options = [
        GraphOptions::default(),
        GraphOptions {
            max_depth: 0,
            max_nodes: 5,
        },
        GraphOptions {
            max_depth: 4,
            max_nodes: 10,
        },
    ];

    for completed in completed_sets().into_iter().step_by(7) {
        for opts in &options {
            let graph = build_progression_graph(&catalog, &completed, opts);
            assert!(graph.node_count() <= opts.max_nodes);

            let ids: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
            assert_eq!(ids.len(), graph.nodes.len(), "node ids are unique");
            for edge in &graph.edges {
                assert!(ids.contains(edge.from.as_str()) && ids.contains(edge.to.as_str()));
            }

            let edge_keys: HashSet<_> = graph.edges.iter().collect();
            assert_eq!(edge_keys.len(), graph.edges.len(), "no duplicate edges");

            assert_eq!(graph.eligible, available_courses(&catalog, &completed));
        }

        let full = build_progression_graph(&catalog, &completed, &GraphOptions::default());
        for code in &completed {
            assert!(full.node(code).is_some(), "{code} missing from the uncapped graph");
        }
    }
}

#[test]
fn or_group_accepts_any_member() {
    let catalog = sample_catalog();
    for alternative in ["CMPSC 122", "CMPSC 132"] {
        let completed: HashSet<String> = [alternative.to_string()].into();
        let explanation = explain(&catalog, "CMPSC 221", &completed).unwrap();
        assert!(explanation.is_satisfiable(), "{alternative} should satisfy CMPSC 221");
    }

    let none = explain(&catalog, "CMPSC 221", &HashSet::new()).unwrap();
    assert_eq!(
        none.missing_prerequisites,
        vec![vec!["CMPSC 122".to_string(), "CMPSC 132".to_string()]]
    );
}
