//! Core module for course planning
//!
//! Everything under `models`, `planner` and `report` is pure computation over an
//! immutable [`models::Catalog`] snapshot. Only the catalog cache loader touches
//! the filesystem.

pub mod config;
pub mod error;
pub mod models;
pub mod planner;
pub mod report;

/// Returns the current version of the `CoursePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
