//! Engine errors

use crate::core::TaskId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Only raised when strict resolution is enabled
    #[error("Task {task} depends on unknown task \"{dependency}\"")]
    UnresolvedDependency { task: TaskId, dependency: String },

    /// Only raised when strict cycle checking is enabled
    #[error("Dependency cycle detected: {}", format_cycle(.cycle))]
    CycleDetected { cycle: Vec<TaskId> },

    #[error("Failed to write rendering to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_cycle(cycle: &[TaskId]) -> String {
    let mut parts: Vec<String> = cycle.iter().map(ToString::to_string).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.to_string());
    }
    parts.join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_closes_loop() {
        let err = EngineError::CycleDetected {
            cycle: vec![TaskId::from_index(0), TaskId::from_index(2)],
        };
        assert_eq!(err.to_string(), "Dependency cycle detected: task1 -> task3 -> task1");
    }
}
