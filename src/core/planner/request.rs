//! One planning round trip: everything a front end asks for in one call
//!
//! All per-student state (completed courses, filters, queries) travels in the
//! [`PlanRequest`]; the catalog is the only other input and is never modified.

use super::eligibility::{available_courses, basic_courses, normalize_completed, split_by_concurrent};
use super::explain::{explain, Explanation};
use super::levels::LevelFilter;
use super::progression::{build_progression_graph, GraphOptions};
use super::search::find_course;
use crate::core::models::{Catalog, Course, ProgressionGraph};
use serde::Serialize;
use std::collections::HashSet;

/// Inputs for [`plan`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    /// Courses the student has finished (normalized by `plan`)
    pub completed: HashSet<String>,
    /// Levels to list among eligible courses
    pub level_filters: LevelFilter,
    /// Cap on each eligible list; `None` lists everything
    pub max_results: Option<usize>,
    /// Catalog lookup to run alongside the plan
    pub search_query: Option<String>,
    /// Course to explain
    pub why_not_query: Option<String>,
    /// Whether to build the progression graph
    pub include_graph: bool,
    /// Bounds for the progression graph
    pub graph: GraphOptions,
}

impl PlanRequest {
    /// Request for a completed set with every other option at its default
    pub fn for_completed<I, S>(completed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            completed: normalize_completed(completed),
            ..Self::default()
        }
    }
}

/// Answer to a "why not" query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhyNot {
    /// Text shown to the student
    pub answer: String,
    /// Structured result when the course exists
    pub explanation: Option<Explanation>,
}

/// Everything [`plan`] computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResponse<'a> {
    /// Normalized completed courses, sorted
    pub completed: Vec<String>,
    /// 100-level courses with no requirements; only filled when nothing is completed
    pub basics: Vec<&'a Course>,
    /// Eligible courses without concurrent groups, level-filtered and capped
    pub eligible_no_concurrent: Vec<&'a Course>,
    /// Eligible courses with concurrent groups, level-filtered and capped
    pub eligible_with_concurrent: Vec<&'a Course>,
    /// Progression graph, when requested
    pub graph: Option<ProgressionGraph<'a>>,
    /// Result of the search query
    pub search_results: Vec<&'a Course>,
    /// Result of the why-not query
    pub why_not: Option<WhyNot>,
}

/// Run a full planning request against a catalog
///
/// With nothing completed the student gets the 100-level starting courses and
/// no eligibility lists. Otherwise eligible courses are split by whether they
/// carry concurrent groups, then each list is level-filtered and capped.
#[must_use]
pub fn plan<'a>(catalog: &'a Catalog, request: &PlanRequest) -> PlanResponse<'a> {
    let completed = normalize_completed(&request.completed);

    let mut response = PlanResponse {
        completed: sorted(&completed),
        basics: Vec::new(),
        eligible_no_concurrent: Vec::new(),
        eligible_with_concurrent: Vec::new(),
        graph: None,
        search_results: Vec::new(),
        why_not: None,
    };

    if completed.is_empty() {
        response.basics = basic_courses(catalog)
            .into_iter()
            .filter(|c| c.level() == Some(100))
            .collect();
    } else {
        let eligible = available_courses(catalog, &completed);
        let (no_concurrent, with_concurrent) = split_by_concurrent(&eligible);
        response.eligible_no_concurrent = cap(request.level_filters.apply(&no_concurrent), request.max_results);
        response.eligible_with_concurrent =
            cap(request.level_filters.apply(&with_concurrent), request.max_results);
    }

    if request.include_graph {
        response.graph = Some(build_progression_graph(catalog, &completed, &request.graph));
    }

    if let Some(query) = non_blank(request.search_query.as_deref()) {
        response.search_results = find_course(catalog, query);
    }

    if let Some(query) = non_blank(request.why_not_query.as_deref()) {
        response.why_not = Some(match explain(catalog, query, &completed) {
            Ok(explanation) => WhyNot {
                answer: explanation.to_string(),
                explanation: Some(explanation),
            },
            Err(err) => WhyNot {
                answer: err.to_string(),
                explanation: None,
            },
        });
    }

    response
}

fn sorted(codes: &HashSet<String>) -> Vec<String> {
    let mut codes: Vec<String> = codes.iter().cloned().collect();
    codes.sort();
    codes
}

fn cap(mut courses: Vec<&Course>, max_results: Option<usize>) -> Vec<&Course> {
    if let Some(max) = max_results {
        courses.truncate(max);
    }
    courses
}

fn non_blank(query: Option<&str>) -> Option<&str> {
    query.map(str::trim).filter(|q| !q.is_empty())
}
