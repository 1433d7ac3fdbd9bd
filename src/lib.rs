//! Shared library for `CoursePlanner`
//! Contains the eligibility engine and planning core used by the CLI

pub mod core;

pub use crate::core::{config, error, get_version, models, planner, report};
