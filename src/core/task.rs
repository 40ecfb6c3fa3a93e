//! Task records - input descriptors and the annotated tasks produced by a build

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier, assigned in input order starting at 1.
///
/// Displays and serializes as `task1`, `task2`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(usize);

impl TaskId {
    /// Id for the task at `index` (zero-based) in the input list
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Zero-based position of the task in the input list
    pub fn index(self) -> usize {
        self.0 - 1
    }

    /// One-based ordinal
    pub fn ordinal(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task{}", self.0)
    }
}

impl Serialize for TaskId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A task as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    #[serde(default)]
    pub phase: String,
    #[serde(default)]
    pub effort: Option<String>,
    #[serde(default, alias = "dependencies")]
    pub depends_on: Vec<String>,
}

impl TaskSpec {
    /// Create a task with no phase, effort or dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn effort(mut self, effort: impl Into<String>) -> Self {
        self.effort = Some(effort.into());
        self
    }

    /// Add a dependency by task name
    pub fn after(mut self, name: impl Into<String>) -> Self {
        self.depends_on.push(name.into());
        self
    }
}

/// A task annotated with its id, estimated duration and resolved predecessors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub phase: String,
    pub effort: Option<String>,
    pub duration: u32,
    pub dependency_names: Vec<String>,
    /// Predecessors whose names resolved, in declaration order
    pub resolved_dependencies: Vec<TaskId>,
}

impl Task {
    /// Root tasks declare no dependencies at all.
    ///
    /// A task whose declared dependencies all failed to resolve is still not a root.
    pub fn is_root(&self) -> bool {
        self.dependency_names.is_empty()
    }
}
