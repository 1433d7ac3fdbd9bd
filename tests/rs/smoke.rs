//! Integration smoke tests for `course_planner`

use course_planner::get_version;
use course_planner::models::{Catalog, Course};
use course_planner::planner::{available_courses, explain, find_course, parse_completed};
use std::collections::HashSet;

fn codes(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.code.clone()).collect()
}

fn scenario() -> Catalog {
    Catalog::from_json_str(
        r#"{
            "CMPSC 131": {"name": "Programming and Computation I"},
            "CMPSC 132": {"name": "Programming and Computation II", "prereq_groups": [["CMPSC 131"]]},
            "MATH 141": {"name": "Calculus II", "concurrent_groups": [["MATH 140"]]},
            "MATH 140": {"name": "Calculus I"}
        }"#,
    )
    .expect("scenario catalog parses")
}

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn first_term_with_nothing_completed() {
    let catalog = scenario();
    let avail = available_courses(&catalog, &HashSet::new());
    assert_eq!(codes(&avail), vec!["CMPSC 131", "MATH 140", "MATH 141"]);
}

#[test]
fn completing_a_prerequisite_unlocks_the_next_course() {
    let catalog = scenario();
    let avail = available_courses(&catalog, &parse_completed("CMPSC 131"));
    assert_eq!(codes(&avail), vec!["CMPSC 132", "MATH 140", "MATH 141"]);
}

#[test]
fn explain_lists_the_missing_prerequisite() {
    let catalog = scenario();
    let explanation = explain(&catalog, "CMPSC 132", &HashSet::new()).expect("course exists");
    assert_eq!(explanation.missing_prerequisites, vec![vec!["CMPSC 131".to_string()]]);
    assert!(explanation.missing_concurrent.is_empty());
}

#[test]
fn search_by_bare_number() {
    let catalog = scenario();
    assert_eq!(codes(&find_course(&catalog, "131")), vec!["CMPSC 131"]);
}
