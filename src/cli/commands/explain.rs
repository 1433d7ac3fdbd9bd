//! Explain command handler
//!
//! An unknown course is an answer, not a failure: the message is printed and
//! the command still succeeds.

use super::{fail, print_json, CatalogSource};
use crate::args::{CompletedArgs, OutputFormat};
use course_planner::config::Config;
use course_planner::error::PlannerError;
use course_planner::planner::explain;

/// Run the explain command
pub fn run(
    source: CatalogSource<'_>,
    course: &str,
    completed: &CompletedArgs,
    format: OutputFormat,
    config: &Config,
) {
    if let Err(err) = explain_course(source, course, completed, format, config) {
        fail("explain", &err);
    }
}

fn explain_course(
    source: CatalogSource<'_>,
    course: &str,
    completed: &CompletedArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<(), String> {
    let catalog = source.load(config)?;
    let completed = completed.to_set()?;

    match (explain(&catalog, course, &completed), format) {
        (Ok(explanation), OutputFormat::Json) => print_json(&explanation),
        (Ok(explanation), OutputFormat::Text) => {
            println!("{explanation}");
            Ok(())
        }
        (Err(err @ PlannerError::NotFound(_)), _) => {
            println!("{err}");
            Ok(())
        }
        (Err(err), _) => Err(err.to_string()),
    }
}
