//! Plain-text rendering of courses and requirement groups

use crate::core::models::{Course, Requirement};
use crate::core::planner::levels::group_by_level;
use std::fmt::Write;

/// Render one group: a single code bare, several as `(A or B)` sorted
#[must_use]
pub fn format_group<S: AsRef<str>>(codes: &[S]) -> String {
    let mut sorted: Vec<&str> = codes.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();
    match sorted.as_slice() {
        [single] => (*single).to_string(),
        many => format!("({})", many.join(" or ")),
    }
}

/// Render a requirement as `A AND (B or C)`, or `None` when it has no groups
#[must_use]
pub fn format_groups(requirement: &Requirement) -> String {
    if requirement.is_empty() {
        return "None".to_string();
    }
    requirement
        .groups()
        .iter()
        .map(|g| format_group(&g.to_vec()))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Render credits as `3 cr` or `1.5 cr`; empty when unknown
#[must_use]
pub fn format_credits(credits: Option<f32>) -> String {
    match credits {
        None => String::new(),
        Some(c) if c.fract().abs() < f32::EPSILON => format!("{c:.0} cr"),
        Some(c) => format!("{c} cr"),
    }
}

/// One-line summary: `CODE - Name (3 cr)`
#[must_use]
pub fn course_line(course: &Course) -> String {
    let credits = format_credits(course.credits);
    if credits.is_empty() {
        format!("{} - {}", course.code, course.name)
    } else {
        format!("{} - {} ({credits})", course.code, course.name)
    }
}

/// Multi-line detail block used for search results
#[must_use]
pub fn course_detail(course: &Course) -> String {
    let mut out = course_line(course);
    let _ = write!(out, "\n    Prerequisites: {}", format_groups(&course.prerequisites));
    if course.has_concurrent() {
        let _ = write!(out, "\n    Concurrent: {}", format_groups(&course.concurrent));
    }
    if let Some(description) = &course.description {
        let _ = write!(out, "\n    {description}");
    }
    out
}

/// Heading for a level bucket
#[must_use]
pub fn level_heading(level: u32) -> String {
    if level == 0 {
        "Other-level".to_string()
    } else {
        format!("{level}-level")
    }
}

/// Courses grouped under level headings, one line each
///
/// Returns an empty string for an empty list.
#[must_use]
pub fn render_by_level(courses: &[&Course]) -> String {
    let mut out = String::new();
    for (level, bucket) in group_by_level(courses) {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", level_heading(level));
        for course in bucket {
            let _ = writeln!(out, "  {}", course_line(course));
        }
    }
    out
}
