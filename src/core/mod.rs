//! Core engine - duration estimates, graph building, critical path analysis

mod critical_path;
mod estimate;
mod graph;
mod task;

pub use critical_path::{analyze, CriticalPathAnalyzer, PathOutcome};
pub use estimate::DurationEstimator;
pub use graph::{GraphBuilder, TaskGraph, UnresolvedDependency};
pub use task::{Task, TaskId, TaskSpec};
