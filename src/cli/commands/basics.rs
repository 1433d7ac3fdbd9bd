//! Basics command handler

use super::{fail, print_json, CatalogSource};
use crate::args::OutputFormat;
use course_planner::config::Config;
use course_planner::planner::basic_courses;
use course_planner::report::render_by_level;

/// Run the basics command: courses with no requirements at all
pub fn run(source: CatalogSource<'_>, format: OutputFormat, config: &Config) {
    if let Err(err) = basics(source, format, config) {
        fail("basics", &err);
    }
}

fn basics(source: CatalogSource<'_>, format: OutputFormat, config: &Config) -> Result<(), String> {
    let catalog = source.load(config)?;
    let courses = basic_courses(&catalog);

    match format {
        OutputFormat::Json => print_json(&courses),
        OutputFormat::Text => {
            if courses.is_empty() {
                println!("No courses without requirements in this catalog.");
            } else {
                println!("Courses with no prerequisites or concurrent requirements:\n");
                print!("{}", render_by_level(&courses));
            }
            Ok(())
        }
    }
}
