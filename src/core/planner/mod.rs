//! Planning engine: eligibility, diagnostics, progression graph and lookup

pub mod eligibility;
pub mod explain;
pub mod levels;
pub mod progression;
pub mod request;
pub mod search;

pub use eligibility::{
    available_courses, basic_courses, can_take_this_term, normalize_completed, parse_completed,
    split_by_concurrent,
};
pub use explain::{explain, Explanation};
pub use levels::{group_by_level, LevelFilter, FILTER_LEVELS};
pub use progression::{build_progression_graph, GraphOptions, DEFAULT_GRAPH_DEPTH, DEFAULT_GRAPH_MAX_NODES};
pub use request::{plan, PlanRequest, PlanResponse, WhyNot};
pub use search::find_course;
