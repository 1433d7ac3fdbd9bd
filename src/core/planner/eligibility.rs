//! Single-term eligibility as a fixed point
//!
//! A course can be taken this term when:
//! 1. every prerequisite group has a member in the completed set, and
//! 2. every concurrent group has a member in the completed set or among the
//!    courses already planned for this term.
//!
//! Planning one course can unlock another through a concurrent requirement, so
//! passes over the catalog repeat until one adds nothing. Each pass either grows
//! the planned set or ends the loop, so the computation is bounded by the
//! catalog size.

use crate::core::models::{normalize_code, Catalog, Course};
use std::collections::{BTreeSet, HashSet};

/// Normalize a completed-course list, silently dropping blank entries
pub fn normalize_completed<I, S>(completed: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    completed
        .into_iter()
        .map(|c| normalize_code(c.as_ref()))
        .filter(|c| !c.is_empty())
        .collect()
}

/// Parse free text (comma- or newline-separated) into a completed set
#[must_use]
pub fn parse_completed(text: &str) -> HashSet<String> {
    normalize_completed(text.split([',', '\n']))
}

/// Whether `course` can be registered for given what is completed and what is
/// already planned for the same term
///
/// Prerequisites only count completed courses; concurrent groups also accept
/// planned ones.
#[must_use]
pub fn can_take_this_term(
    course: &Course,
    completed: &HashSet<String>,
    planned: &BTreeSet<String>,
) -> bool {
    course
        .prerequisites
        .is_satisfied_when(|code| completed.contains(code))
        && course
            .concurrent
            .is_satisfied_when(|code| completed.contains(code) || planned.contains(code))
}

/// Every course registrable in one term, sorted by code
///
/// `completed` is normalized before use. Completed courses are never part of
/// the result.
#[must_use]
pub fn available_courses<'a>(catalog: &'a Catalog, completed: &HashSet<String>) -> Vec<&'a Course> {
    let completed = normalize_completed(completed);
    let planned = plan_term(catalog, &completed);

    planned.iter().filter_map(|code| catalog.get(code)).collect()
}

/// Grow the planned set until a full pass adds nothing
fn plan_term(catalog: &Catalog, completed: &HashSet<String>) -> BTreeSet<String> {
    let mut planned = BTreeSet::new();

    loop {
        let mut added = false;
        for course in catalog.courses() {
            if completed.contains(&course.code) || planned.contains(&course.code) {
                continue;
            }
            if can_take_this_term(course, completed, &planned) {
                planned.insert(course.code.clone());
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    planned
}

/// Courses with no prerequisites and no concurrent requirements, sorted by code
#[must_use]
pub fn basic_courses(catalog: &Catalog) -> Vec<&Course> {
    catalog.courses().filter(|c| c.is_basic()).collect()
}

/// Split courses into those without and those with concurrent requirements,
/// preserving order
#[must_use]
pub fn split_by_concurrent<'a>(courses: &[&'a Course]) -> (Vec<&'a Course>, Vec<&'a Course>) {
    courses.iter().copied().partition(|c| !c.has_concurrent())
}
