//! Available command handler
//!
//! Lists every course the student can register for this term, split by
//! whether it carries a concurrent requirement.

use super::{fail, listing_options, print_json, CatalogSource};
use crate::args::{CompletedArgs, ListingArgs, OutputFormat};
use course_planner::config::Config;
use course_planner::models::Course;
use course_planner::planner::{available_courses, split_by_concurrent};
use course_planner::report::render_by_level;
use serde::Serialize;
use tracing::info;

/// Run the available command
pub fn run(
    source: CatalogSource<'_>,
    completed: &CompletedArgs,
    listing: &ListingArgs,
    format: OutputFormat,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = available(source, completed, listing, format, config, verbose) {
        fail("available", &err);
    }
}

#[derive(Serialize)]
struct AvailableOutput<'a> {
    completed: Vec<String>,
    no_concurrent: Vec<&'a Course>,
    with_concurrent: Vec<&'a Course>,
}

fn available(
    source: CatalogSource<'_>,
    completed: &CompletedArgs,
    listing: &ListingArgs,
    format: OutputFormat,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let catalog = source.load(config)?;
    let completed = completed.to_set()?;
    let (filter, max_results) = listing_options(listing, config);

    let eligible = available_courses(&catalog, &completed);
    info!("{} of {} courses eligible", eligible.len(), catalog.len());

    let (no_concurrent, with_concurrent) = split_by_concurrent(&eligible);
    let mut no_concurrent = filter.apply(&no_concurrent);
    let mut with_concurrent = filter.apply(&with_concurrent);
    if let Some(max) = max_results {
        no_concurrent.truncate(max);
        with_concurrent.truncate(max);
    }

    match format {
        OutputFormat::Json => {
            let mut completed: Vec<String> = completed.into_iter().collect();
            completed.sort();
            print_json(&AvailableOutput {
                completed,
                no_concurrent,
                with_concurrent,
            })
        }
        OutputFormat::Text => {
            if verbose {
                println!(
                    "{} completed, {} eligible before filtering\n",
                    completed.len(),
                    eligible.len()
                );
            }
            print_section("Eligible now (no concurrent requirements)", &no_concurrent);
            println!();
            print_section("Eligible with concurrent requirements", &with_concurrent);
            Ok(())
        }
    }
}

fn print_section(title: &str, courses: &[&Course]) {
    println!("=== {title} ===\n");
    if courses.is_empty() {
        println!("  (none)");
    } else {
        print!("{}", render_by_level(courses));
    }
}
