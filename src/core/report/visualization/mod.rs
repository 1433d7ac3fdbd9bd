//! Visualization generation for progression graphs
//!
//! Provides the Mermaid generator used by the Markdown and `.mmd` exports.

pub mod mermaid;

pub use mermaid::MermaidGenerator;
