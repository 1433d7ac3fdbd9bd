//! Search command handler

use super::{fail, print_json, CatalogSource};
use crate::args::OutputFormat;
use course_planner::config::Config;
use course_planner::planner::find_course;
use course_planner::report::course_detail;

/// Run the search command
pub fn run(source: CatalogSource<'_>, query: &str, format: OutputFormat, config: &Config) {
    if let Err(err) = search(source, query, format, config) {
        fail("search", &err);
    }
}

fn search(source: CatalogSource<'_>, query: &str, format: OutputFormat, config: &Config) -> Result<(), String> {
    let catalog = source.load(config)?;
    let results = find_course(&catalog, query);

    match format {
        OutputFormat::Json => print_json(&results),
        OutputFormat::Text => {
            if results.is_empty() {
                println!("No courses match \"{}\".", query.trim());
            }
            for course in results {
                println!("{}\n", course_detail(course));
            }
            Ok(())
        }
    }
}
