//! "Why not" diagnostics for a single course
//!
//! This is a local check of one course's direct requirements against the
//! completed set. It does not run the eligibility fixed point: a concurrent
//! group is met by a completed course or by the course itself, never by other
//! courses that could be planned alongside it. For a course whose concurrent
//! requirement is only reachable through a chain of other concurrent courses,
//! `explain` reports the group as missing even though `available_courses` may
//! list the course.

use crate::core::error::{PlannerError, Result};
use crate::core::models::{normalize_code, Catalog};
use crate::core::planner::eligibility::normalize_completed;
use crate::core::report::listing::format_group;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Unmet requirement groups for one course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Normalized course code
    pub code: String,
    /// Course title
    pub name: String,
    /// Prerequisite groups with no completed member (each a sorted code list)
    pub missing_prerequisites: Vec<Vec<String>>,
    /// Concurrent groups with no completed member and not naming the course itself
    pub missing_concurrent: Vec<Vec<String>>,
}

impl Explanation {
    /// Whether the course's direct requirements are all met
    ///
    /// This is not the same as "eligible right now"; see the module docs.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.missing_prerequisites.is_empty() && self.missing_concurrent.is_empty()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_satisfiable() {
            return write!(
                f,
                "You already satisfy enforced prereqs/concurrent requirements for {}.",
                self.code
            );
        }

        write!(f, "Why you can't take {} ({}) yet:", self.code, self.name)?;
        if !self.missing_prerequisites.is_empty() {
            write!(
                f,
                "\nMissing enforced prerequisites (need at least one from each group):"
            )?;
            for group in &self.missing_prerequisites {
                write!(f, "\n  - {}", format_group(group))?;
            }
        }
        if !self.missing_concurrent.is_empty() {
            write!(
                f,
                "\nMissing enforced concurrent requirement(s) (need at least one from each group):"
            )?;
            for group in &self.missing_concurrent {
                write!(f, "\n  - {}", format_group(group))?;
            }
        }
        Ok(())
    }
}

/// Explain which requirement groups of `course_code` are unmet
///
/// # Errors
/// Returns [`PlannerError::NotFound`] if the normalized code is not in the catalog
pub fn explain(catalog: &Catalog, course_code: &str, completed: &HashSet<String>) -> Result<Explanation> {
    let code = normalize_code(course_code);
    let course = catalog
        .get(&code)
        .ok_or_else(|| PlannerError::NotFound(code.clone()))?;
    let completed = normalize_completed(completed);

    let missing_prerequisites = course
        .prerequisites
        .unmet_groups_when(|c| completed.contains(c))
        .into_iter()
        .map(|g| g.to_vec())
        .collect();

    let missing_concurrent = course
        .concurrent
        .unmet_groups_when(|c| c == code || completed.contains(c))
        .into_iter()
        .map(|g| g.to_vec())
        .collect();

    Ok(Explanation {
        code: course.code.clone(),
        name: course.name.clone(),
        missing_prerequisites,
        missing_concurrent,
    })
}
