//! Course lookup by code, bare number, or text

use crate::core::models::code::course_number;
use crate::core::models::{normalize_code, Catalog, Course};
use regex::Regex;
use std::sync::LazyLock;

/// A query made only of a three-digit course number
static BARE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}$").expect("bare number pattern is valid"));

/// Find courses matching a free-form query, sorted by code
///
/// Tried in order:
/// 1. the normalized query is a catalog code: that course alone
/// 2. the query is a bare three-digit number: every course carrying it, any suffix
/// 3. otherwise a case-insensitive substring of the name or the code
///
/// A blank query finds nothing.
#[must_use]
pub fn find_course<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Course> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    if let Some(course) = catalog.get(&normalize_code(query)) {
        return vec![course];
    }

    if BARE_NUMBER.is_match(query) {
        return catalog
            .courses()
            .filter(|c| course_number(&c.code) == Some(query))
            .collect();
    }

    let needle = query.to_lowercase();
    catalog
        .courses()
        .filter(|c| c.name.to_lowercase().contains(&needle) || c.code.to_lowercase().contains(&needle))
        .collect()
}
