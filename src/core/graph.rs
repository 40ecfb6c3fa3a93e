//! Graph builder - resolves named dependencies into a task DAG

use super::estimate::DurationEstimator;
use super::task::{Task, TaskId, TaskSpec};
use crate::error::EngineError;
use serde::Serialize;
use std::collections::HashMap;

/// A declared dependency name that matched no task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedDependency {
    pub task: TaskId,
    pub dependency: String,
}

/// Task graph: annotated tasks plus forward (successor) edges
#[derive(Debug, Clone, Default)]
pub struct TaskGraph {
    tasks: Vec<Task>,
    successors: Vec<Vec<TaskId>>,
    unresolved: Vec<UnresolvedDependency>,
}

impl TaskGraph {
    /// Get task by ID
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.index())
    }

    /// All tasks in input order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks that depend directly on `id`
    pub fn successors(&self, id: TaskId) -> &[TaskId] {
        self.successors
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every `(predecessor, successor)` edge, ordered by predecessor then insertion
    pub fn edges(&self) -> impl Iterator<Item = (TaskId, TaskId)> + '_ {
        self.tasks.iter().flat_map(move |task| {
            self.successors(task.id)
                .iter()
                .map(move |&successor| (task.id, successor))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    /// Dependency names that were dropped because no task carries that name
    pub fn unresolved(&self) -> &[UnresolvedDependency] {
        &self.unresolved
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Builds a [`TaskGraph`] from caller-supplied task descriptors
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    estimator: DurationEstimator,
    strict_resolution: bool,
}

impl GraphBuilder {
    pub fn new(estimator: DurationEstimator) -> Self {
        Self {
            estimator,
            strict_resolution: false,
        }
    }

    /// Reject unknown dependency names instead of dropping them
    pub fn strict_resolution(mut self, strict: bool) -> Self {
        self.strict_resolution = strict;
        self
    }

    pub fn build(&self, specs: &[TaskSpec]) -> Result<TaskGraph, EngineError> {
        // First pass: ids and durations, plus first-wins name lookup
        let mut tasks: Vec<Task> = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| Task {
                id: TaskId::from_index(index),
                name: spec.name.clone(),
                phase: spec.phase.clone(),
                effort: spec.effort.clone(),
                duration: self.estimator.estimate(spec.effort.as_deref()),
                dependency_names: spec.depends_on.clone(),
                resolved_dependencies: Vec::new(),
            })
            .collect();

        let mut by_name: HashMap<&str, TaskId> = HashMap::new();
        for (index, spec) in specs.iter().enumerate() {
            by_name
                .entry(spec.name.as_str())
                .or_insert_with(|| TaskId::from_index(index));
        }

        // Second pass: edges
        let mut successors = vec![Vec::new(); tasks.len()];
        let mut unresolved = Vec::new();

        for task in &mut tasks {
            for dep_name in &task.dependency_names {
                let Some(&pred) = by_name.get(dep_name.as_str()) else {
                    if self.strict_resolution {
                        return Err(EngineError::UnresolvedDependency {
                            task: task.id,
                            dependency: dep_name.clone(),
                        });
                    }
                    log::debug!("{} ({}): dropping unknown dependency {:?}", task.id, task.name, dep_name);
                    unresolved.push(UnresolvedDependency {
                        task: task.id,
                        dependency: dep_name.clone(),
                    });
                    continue;
                };

                if task.resolved_dependencies.contains(&pred) {
                    continue;
                }
                task.resolved_dependencies.push(pred);
                successors[pred.index()].push(task.id);
            }
        }

        let graph = TaskGraph {
            tasks,
            successors,
            unresolved,
        };
        log::debug!(
            "Built graph: {} tasks, {} edges, {} unresolved",
            graph.len(),
            graph.edge_count(),
            graph.unresolved.len()
        );
        Ok(graph)
    }
}
