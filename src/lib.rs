//! taskpath - task dependency graphs and critical path analysis
//!
//! Turns an ordered list of named tasks (with free-form effort estimates and
//! dependencies by name) into a task graph, finds its critical path and renders
//! it as a Mermaid gantt chart, Mermaid flowchart, Graphviz DOT or JSON document.

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod plan;
pub mod render;

// Re-exports
pub use config::EngineConfig;
pub use crate::core::{DurationEstimator, GraphBuilder, PathOutcome, Task, TaskGraph, TaskId, TaskSpec};
pub use engine::{BuildResult, Engine, Rendering};
pub use error::EngineError;
pub use plan::Plan;
pub use render::{Format, GraphDocument, Renderer};

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
