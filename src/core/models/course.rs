//! Course model

use super::code::{course_level, normalize_code};
use super::requirement::Requirement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a course in a department catalog
///
/// The code is always stored normalized. Requirements are immutable once the
/// catalog is loaded; the planning functions only ever read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CourseRecord", into = "CourseRecord")]
pub struct Course {
    /// Normalized course code (e.g., "CMPSC 131")
    pub code: String,

    /// Course title (e.g., "Programming and Computation I: Fundamentals")
    pub name: String,

    /// Credit hours, when the catalog lists them
    pub credits: Option<f32>,

    /// Enforced prerequisites: must already be completed
    pub prerequisites: Requirement,

    /// Enforced concurrent requirements: completed or taken in the same term
    pub concurrent: Requirement,

    /// Catalog description
    pub description: Option<String>,
}

impl Course {
    /// Create a new course with no requirements
    ///
    /// # Arguments
    /// * `code` - Course code; normalized on construction
    /// * `name` - Course title
    /// * `credits` - Credit hours, if known
    #[must_use]
    pub fn new(code: &str, name: String, credits: Option<f32>) -> Self {
        Self {
            code: normalize_code(code),
            name: clean_name(&name),
            credits: sanitize_credits(credits),
            prerequisites: Requirement::none(),
            concurrent: Requirement::none(),
            description: None,
        }
    }

    /// Builder-style: add a prerequisite group (any one of `codes`)
    #[must_use]
    pub fn with_prerequisite_group<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prerequisites.push_group(codes);
        self
    }

    /// Builder-style: add a concurrent group (any one of `codes`)
    #[must_use]
    pub fn with_concurrent_group<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.concurrent.push_group(codes);
        self
    }

    /// Builder-style: set the description; a blank one clears it
    #[must_use]
    pub fn with_description(mut self, description: String) -> Self {
        self.description = clean_description(Some(description));
        self
    }

    /// Course level derived from the code (e.g., 100, 200), if parseable
    #[must_use]
    pub fn level(&self) -> Option<u32> {
        course_level(&self.code)
    }

    /// Whether the course has neither prerequisites nor concurrent requirements
    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.prerequisites.is_empty() && self.concurrent.is_empty()
    }

    /// Whether the course has at least one concurrent group
    #[must_use]
    pub fn has_concurrent(&self) -> bool {
        !self.concurrent.is_empty()
    }

    /// Every code named by a prerequisite or concurrent group
    #[must_use]
    pub fn dependencies(&self) -> BTreeSet<&str> {
        let mut deps = self.prerequisites.codes();
        deps.extend(self.concurrent.codes());
        deps
    }
}

/// Titles are stored trimmed
fn clean_name(name: &str) -> String {
    name.trim().to_string()
}

/// Blank descriptions are stored as absent
fn clean_description(description: Option<String>) -> Option<String> {
    description.filter(|d| !d.trim().is_empty())
}

/// Credits must be a finite, non-negative number
fn sanitize_credits(credits: Option<f32>) -> Option<f32> {
    credits.filter(|c| c.is_finite() && *c >= 0.0)
}

/// Serialized shape of a course in the JSON catalog cache
///
/// This is the loading boundary: whatever produced the record, codes are
/// normalized, blank codes and empty groups dropped, and invalid credits
/// discarded when it becomes a [`Course`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course code as written by the producer
    #[serde(default)]
    pub code: String,
    /// Course title
    #[serde(default)]
    pub name: String,
    /// Credit hours
    #[serde(default)]
    pub credits: Option<f32>,
    /// Prerequisite groups as lists of codes
    #[serde(default)]
    pub prereq_groups: Vec<Vec<String>>,
    /// Concurrent groups as lists of codes
    #[serde(default)]
    pub concurrent_groups: Vec<Vec<String>>,
    /// Catalog description
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CourseRecord> for Course {
    fn from(record: CourseRecord) -> Self {
        Self {
            code: normalize_code(&record.code),
            name: clean_name(&record.name),
            credits: sanitize_credits(record.credits),
            prerequisites: Requirement::from_code_lists(record.prereq_groups),
            concurrent: Requirement::from_code_lists(record.concurrent_groups),
            description: clean_description(record.description),
        }
    }
}

impl From<Course> for CourseRecord {
    fn from(course: Course) -> Self {
        Self {
            prereq_groups: course.prerequisites.to_code_lists(),
            concurrent_groups: course.concurrent.to_code_lists(),
            code: course.code,
            name: course.name,
            credits: course.credits,
            description: course.description,
        }
    }
}
