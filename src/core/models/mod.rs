//! Data models for `CoursePlanner`

pub mod catalog;
pub mod code;
pub mod course;
pub mod graph;
pub mod requirement;

pub use catalog::{catalog_cache_path, Catalog};
pub use code::{course_level, display_level, normalize_code};
pub use course::{Course, CourseRecord};
pub use graph::{EdgeKind, GraphEdge, GraphNode, NodeStatus, ProgressionGraph};
pub use requirement::{group_satisfied, requirement_satisfied, Requirement, RequirementGroup};
