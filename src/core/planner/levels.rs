//! Course-level bucketing and filtering

use crate::core::models::code::MAX_DISPLAY_LEVEL;
use crate::core::models::Course;
use std::collections::{BTreeMap, BTreeSet};

/// Levels a student can filter by
pub const FILTER_LEVELS: [u32; 4] = [100, 200, 300, 400];

/// Group courses by level, each bucket sorted by code
///
/// Courses without a parseable level go under 0. Levels are not clamped here:
/// a 500-level course gets its own bucket.
#[must_use]
pub fn group_by_level<'a>(courses: &[&'a Course]) -> BTreeMap<u32, Vec<&'a Course>> {
    let mut levels: BTreeMap<u32, Vec<&'a Course>> = BTreeMap::new();
    for &course in courses {
        levels.entry(course.level().unwrap_or(0)).or_default().push(course);
    }
    for bucket in levels.values_mut() {
        bucket.sort_by(|a, b| a.code.cmp(&b.code));
    }
    levels
}

/// Set of allowed course levels
///
/// The 400 entry admits every level from 400 up. Courses with no level never
/// pass, and an empty filter admits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelFilter {
    allowed: BTreeSet<u32>,
}

impl LevelFilter {
    /// Build a filter from levels; values outside [`FILTER_LEVELS`] are ignored
    pub fn new<I: IntoIterator<Item = u32>>(levels: I) -> Self {
        Self {
            allowed: levels
                .into_iter()
                .filter(|l| FILTER_LEVELS.contains(l))
                .collect(),
        }
    }

    /// A filter admitting every level
    #[must_use]
    pub fn all() -> Self {
        Self::new(FILTER_LEVELS)
    }

    /// The allowed levels, ascending
    pub fn levels(&self) -> impl Iterator<Item = u32> + '_ {
        self.allowed.iter().copied()
    }

    /// Whether no level is allowed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    /// Whether a course passes the filter
    #[must_use]
    pub fn admits(&self, course: &Course) -> bool {
        course.level().is_some_and(|level| {
            self.allowed.contains(&level)
                || (level >= MAX_DISPLAY_LEVEL && self.allowed.contains(&MAX_DISPLAY_LEVEL))
        })
    }

    /// Keep only admitted courses, preserving order
    #[must_use]
    pub fn apply<'a>(&self, courses: &[&'a Course]) -> Vec<&'a Course> {
        courses.iter().copied().filter(|c| self.admits(c)).collect()
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::all()
    }
}
