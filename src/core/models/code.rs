//! Course code normalization and level derivation

use regex::Regex;
use std::sync::LazyLock;

/// Numeric part of a course code: two or three digits with an optional one-letter suffix
static COURSE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{2,3})[A-Z]?\b").expect("course number pattern is valid"));

/// Highest level shown on its own; everything above is bucketed with it
pub const MAX_DISPLAY_LEVEL: u32 = 400;

/// Normalize a course code to its canonical form (e.g. `" cmpsc  131 "` -> `"CMPSC 131"`)
///
/// Non-breaking spaces count as whitespace, runs of whitespace collapse to a
/// single space, and the result is uppercased. Normalizing twice yields the same
/// string as normalizing once.
#[must_use]
pub fn normalize_code(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// Extract the digit run of a course code (`"MATH 140H"` -> `"140"`)
#[must_use]
pub fn course_number(code: &str) -> Option<&str> {
    COURSE_NUMBER
        .captures(code)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Derive the course level from its number (`"CMPSC 465"` -> `Some(400)`)
///
/// Returns `None` when the code carries no parseable number.
#[must_use]
pub fn course_level(code: &str) -> Option<u32> {
    let number: u32 = course_number(code)?.parse().ok()?;
    Some((number / 100) * 100)
}

/// Level used for display and bucketing: unknown levels become 0 and
/// anything at or above 400 is clamped to 400
#[must_use]
pub fn display_level(code: &str) -> u32 {
    course_level(code).unwrap_or(0).min(MAX_DISPLAY_LEVEL)
}
