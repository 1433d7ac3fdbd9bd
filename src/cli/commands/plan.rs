//! Plan command handler
//!
//! Runs a full planning request and renders every part of the response.

use super::{fail, listing_options, print_json, CatalogSource};
use crate::args::{CompletedArgs, ListingArgs, OutputFormat};
use course_planner::config::Config;
use course_planner::planner::{plan, PlanRequest, PlanResponse};
use course_planner::report::{course_detail, render_by_level};
use std::fmt::Write;

/// Queries and toggles for one plan run
#[derive(Debug, Clone, Default)]
pub struct PlanQueries {
    /// Catalog search
    pub search: Option<String>,
    /// Course to explain
    pub why_not: Option<String>,
    /// Include the progression graph
    pub graph: bool,
}

/// Run the plan command
pub fn run(
    source: CatalogSource<'_>,
    completed: &CompletedArgs,
    listing: &ListingArgs,
    queries: &PlanQueries,
    format: OutputFormat,
    config: &Config,
) {
    if let Err(err) = run_plan(source, completed, listing, queries, format, config) {
        fail("plan", &err);
    }
}

fn run_plan(
    source: CatalogSource<'_>,
    completed: &CompletedArgs,
    listing: &ListingArgs,
    queries: &PlanQueries,
    format: OutputFormat,
    config: &Config,
) -> Result<(), String> {
    let catalog = source.load(config)?;
    let request = build_request(completed, listing, queries, config)?;
    let response = plan(&catalog, &request);

    match format {
        OutputFormat::Json => print_json(&response),
        OutputFormat::Text => {
            print!("{}", render_text(&response));
            Ok(())
        }
    }
}

fn build_request(
    completed: &CompletedArgs,
    listing: &ListingArgs,
    queries: &PlanQueries,
    config: &Config,
) -> Result<PlanRequest, String> {
    let (level_filters, max_results) = listing_options(listing, config);
    Ok(PlanRequest {
        completed: completed.to_set()?,
        level_filters,
        max_results,
        search_query: queries.search.clone(),
        why_not_query: queries.why_not.clone(),
        include_graph: queries.graph || config.planner.show_graph,
        graph: config.graph_options(),
    })
}

fn render_text(response: &PlanResponse<'_>) -> String {
    let mut out = String::new();

    if response.completed.is_empty() {
        out.push_str("=== Start here: 100-level courses with no requirements ===\n\n");
        if response.basics.is_empty() {
            out.push_str("  (none)\n");
        } else {
            out.push_str(&render_by_level(&response.basics));
        }
    } else {
        let _ = write!(out, "Completed: {}\n\n", response.completed.join(", "));
        for (title, courses) in [
            ("Eligible now (no concurrent requirements)", &response.eligible_no_concurrent),
            ("Eligible with concurrent requirements", &response.eligible_with_concurrent),
        ] {
            let _ = write!(out, "=== {title} ===\n\n");
            if courses.is_empty() {
                out.push_str("  (none)\n");
            } else {
                out.push_str(&render_by_level(courses));
            }
            out.push('\n');
        }
    }

    if let Some(why_not) = &response.why_not {
        let _ = write!(out, "\n=== Why not? ===\n\n{}\n", why_not.answer);
    }

    if !response.search_results.is_empty() {
        out.push_str("\n=== Search results ===\n\n");
        for course in &response.search_results {
            let _ = write!(out, "{}\n\n", course_detail(course));
        }
    }

    if let Some(graph) = &response.graph {
        let _ = write!(out, "\n{graph}");
    }

    out
}
