//! Integration tests for planning against the sample CMPSC catalog

use course_planner::error::PlannerError;
use course_planner::models::{Catalog, Course, EdgeKind, NodeStatus};
use course_planner::planner::{
    available_courses, basic_courses, build_progression_graph, explain, find_course, parse_completed, plan,
    split_by_concurrent, GraphOptions, LevelFilter, PlanRequest,
};
use course_planner::report::{GraphFormat, GraphReporter, MermaidGenerator};
use std::collections::HashSet;

const SAMPLE_CATALOG: &str = "samples/catalogs/cmpsc_catalog.json";

fn sample_catalog() -> Catalog {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(SAMPLE_CATALOG);
    let result = Catalog::load_json(&path);
    assert!(result.is_ok(), "Failed to load sample catalog: {:?}", result.err());
    result.unwrap()
}

fn codes(courses: &[&Course]) -> Vec<String> {
    courses.iter().map(|c| c.code.clone()).collect()
}

#[test]
fn test_load_sample_catalog() {
    let catalog = sample_catalog();

    assert_eq!(catalog.len(), 18);
    let cmpsc_465 = catalog.get("cmpsc 465").expect("CMPSC 465 should exist");
    assert_eq!(cmpsc_465.name, "Data Structures and Algorithms");
    assert_eq!(cmpsc_465.prerequisites.len(), 2);
    assert_eq!(cmpsc_465.level(), Some(400));

    let phys_211 = catalog.get("PHYS 211").expect("PHYS 211 should exist");
    assert!(phys_211.has_concurrent());
    assert!(phys_211.prerequisites.is_empty());
}

#[test]
fn test_first_term() {
    let catalog = sample_catalog();

    let avail = available_courses(&catalog, &HashSet::new());
    assert_eq!(
        codes(&avail),
        vec!["CMPSC 101", "CMPSC 121", "CMPSC 131", "CMPSC 497", "MATH 140", "PHYS 211"],
        "PHYS 211 is reachable by taking MATH 140 in the same term"
    );

    let basics = basic_courses(&catalog);
    assert_eq!(
        codes(&basics),
        vec!["CMPSC 101", "CMPSC 121", "CMPSC 131", "CMPSC 497", "MATH 140"]
    );
}

#[test]
fn test_second_term() {
    let catalog = sample_catalog();
    let completed = parse_completed("CMPSC 131, MATH 140");

    let avail = available_courses(&catalog, &completed);
    assert_eq!(
        codes(&avail),
        vec![
            "CMPSC 101",
            "CMPSC 121",
            "CMPSC 132",
            "CMPSC 200",
            "CMPSC 360",
            "CMPSC 497",
            "MATH 141",
            "MATH 220",
            "PHYS 211",
        ]
    );

    let (no_concurrent, with_concurrent) = split_by_concurrent(&avail);
    assert_eq!(codes(&with_concurrent), vec!["PHYS 211"]);
    assert_eq!(no_concurrent.len(), 8);
}

#[test]
fn test_upper_division_term() {
    let catalog = sample_catalog();
    let completed = parse_completed("CMPSC 131\nCMPSC 132\nCMPSC 360\nMATH 140\nMATH 141\nPHYS 211");

    let avail = codes(&available_courses(&catalog, &completed));
    assert!(avail.contains(&"CMPSC 465".to_string()));
    assert!(avail.contains(&"CMPSC 221".to_string()), "either OR member unlocks CMPSC 221");
    assert!(avail.contains(&"PHYS 212".to_string()));
    assert!(
        !avail.contains(&"CMPSC 311".to_string()),
        "CMPEN 271 is outside the catalog and still required"
    );
    assert!(!avail.contains(&"CMPSC 580".to_string()));
}

#[test]
fn test_explain_against_sample() {
    let catalog = sample_catalog();

    let explanation = explain(&catalog, "cmpsc 473", &HashSet::new()).unwrap();
    assert_eq!(explanation.code, "CMPSC 473");
    assert_eq!(
        explanation.missing_prerequisites,
        vec![vec!["CMPSC 311".to_string()], vec!["CMPSC 465".to_string()]]
    );
    let text = explanation.to_string();
    assert!(text.starts_with("Why you can't take CMPSC 473 (Operating Systems Design & Construction) yet:"));
    assert!(text.contains("  - CMPSC 311"));

    let explanation = explain(&catalog, "CMPSC 311", &parse_completed("CMPSC 132")).unwrap();
    assert_eq!(explanation.missing_prerequisites, vec![vec!["CMPEN 271".to_string()]]);

    let explanation = explain(&catalog, "CMPSC 221", &parse_completed("CMPSC 122")).unwrap();
    assert!(explanation.is_satisfiable());

    let missing = explain(&catalog, "CMPSC 999", &HashSet::new());
    assert!(matches!(missing, Err(PlannerError::NotFound(code)) if code == "CMPSC 999"));
}

#[test]
fn test_search_against_sample() {
    let catalog = sample_catalog();

    assert_eq!(codes(&find_course(&catalog, "465")), vec!["CMPSC 465"]);
    assert_eq!(codes(&find_course(&catalog, "cmpsc 131")), vec!["CMPSC 131"]);
    assert_eq!(codes(&find_course(&catalog, "calculus")), vec!["MATH 140", "MATH 141"]);
    assert_eq!(codes(&find_course(&catalog, "PHYS")), vec!["PHYS 211", "PHYS 212"]);
    assert!(find_course(&catalog, "underwater basket weaving").is_empty());

    let programming = codes(&find_course(&catalog, "programming"));
    assert!(programming.contains(&"CMPSC 311".to_string()));
    assert!(!programming.contains(&"MATH 140".to_string()));
}

#[test]
fn test_progression_graph_against_sample() {
    let catalog = sample_catalog();
    let graph = build_progression_graph(&catalog, &parse_completed("CMPSC 131"), &GraphOptions::default());

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "CMPSC 101",
            "CMPSC 121",
            "CMPSC 131",
            "CMPSC 132",
            "CMPSC 360",
            "CMPSC 497",
            "MATH 140",
            "MATH 141",
            "PHYS 211",
        ]
    );

    assert_eq!(graph.node("CMPSC 131").unwrap().status, NodeStatus::Completed);
    assert_eq!(graph.node("MATH 141").unwrap().status, NodeStatus::Locked);
    assert_eq!(graph.node("PHYS 211").unwrap().status, NodeStatus::Eligible);
    assert_eq!(graph.node("CMPSC 497").unwrap().level, 400);
    assert_eq!(graph.node("MATH 140").unwrap().label, "MATH 140\nCalculus With Analytic Geometry I");

    assert_eq!(graph.edges.len(), 6);
    let concurrent: Vec<(&str, &str)> = graph
        .edges
        .iter()
        .filter(|e| e.kind == EdgeKind::Concurrent)
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect();
    assert_eq!(concurrent, vec![("MATH 140", "PHYS 211"), ("MATH 141", "PHYS 211")]);

    let mermaid = MermaidGenerator::generate_graph(&graph);
    assert!(mermaid.starts_with("flowchart LR"));
    assert!(mermaid.contains("-.->"));
}

#[test]
fn test_graph_export_formats() {
    let catalog = sample_catalog();
    let graph = build_progression_graph(&catalog, &parse_completed("MATH 140"), &GraphOptions::default());

    let json = GraphFormat::Json.reporter().render(&graph).expect("json renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert!(value["nodes"].as_array().is_some_and(|n| !n.is_empty()));

    let markdown = GraphFormat::Markdown.reporter().render(&graph).expect("markdown renders");
    assert!(markdown.contains("```mermaid"));

    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("nested").join("graph.mmd");
    GraphFormat::Mermaid
        .reporter()
        .generate(&graph, &out)
        .expect("graph file written");
    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("flowchart LR"));
}

#[test]
fn test_plan_request_against_sample() {
    let catalog = sample_catalog();

    let mut request = PlanRequest::for_completed(["cmpsc 131", "math 140"]);
    request.level_filters = LevelFilter::new([200, 300]);
    request.search_query = Some("Matrices".to_string());
    request.why_not_query = Some("CMPSC 465".to_string());
    request.include_graph = true;

    let response = plan(&catalog, &request);
    assert_eq!(response.completed, vec!["CMPSC 131", "MATH 140"]);
    assert!(response.basics.is_empty());
    assert_eq!(
        codes(&response.eligible_no_concurrent),
        vec!["CMPSC 200", "CMPSC 360", "MATH 220"]
    );
    assert_eq!(codes(&response.eligible_with_concurrent), vec!["PHYS 211"]);
    assert_eq!(codes(&response.search_results), vec!["MATH 220"]);

    let why_not = response.why_not.expect("why-not answered");
    assert!(why_not.answer.contains("CMPSC 132"));
    assert!(why_not.answer.contains("CMPSC 360"));
    assert!(response.graph.is_some());
}

#[test]
fn test_plan_with_nothing_completed_lists_basics() {
    let catalog = sample_catalog();
    let response = plan(&catalog, &PlanRequest::default());

    assert_eq!(
        codes(&response.basics),
        vec!["CMPSC 101", "CMPSC 121", "CMPSC 131", "MATH 140"],
        "only 100-level courses are suggested as a start"
    );
    assert!(response.eligible_no_concurrent.is_empty());
    assert!(response.eligible_with_concurrent.is_empty());
    assert!(response.graph.is_none());
    assert!(response.why_not.is_none());
}

#[test]
fn test_import_round_trip_through_cache() {
    let catalog = sample_catalog();
    let dir = tempfile::TempDir::new().unwrap();
    let path = course_planner::models::catalog_cache_path(dir.path(), "cmpsc");

    catalog.save_json(&path).expect("cache written");
    let reloaded = Catalog::load_json(&path).expect("cache reloads");
    assert_eq!(reloaded, catalog);
}
