//! Engine facade - estimate, build, analyze and render in one call

use crate::config::EngineConfig;
use crate::core::{analyze, DurationEstimator, GraphBuilder, PathOutcome, Task, TaskGraph, TaskId, TaskSpec};
use crate::error::EngineError;
use crate::plan::Plan;
use crate::render::{write_rendering, Format, Renderer};
use std::path::Path;

/// Runs the full pipeline for one task list. Holds no state between builds.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    builder: GraphBuilder,
    strict_cycles: bool,
    renderer: Renderer,
}

impl Engine {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            builder: GraphBuilder::new(DurationEstimator::new())
                .strict_resolution(config.strict_resolution),
            strict_cycles: config.strict_cycles,
            renderer: config.renderer(None),
        }
    }

    /// Build a plan, using its title for the chart when present
    pub fn build_plan(&self, plan: &Plan) -> Result<BuildResult, EngineError> {
        let mut result = self.build(&plan.tasks)?;
        if let Some(title) = &plan.title {
            result.renderer.title = title.clone();
        }
        Ok(result)
    }

    pub fn build(&self, specs: &[TaskSpec]) -> Result<BuildResult, EngineError> {
        let graph = self.builder.build(specs)?;

        let (critical_path, cycle) = match analyze(&graph) {
            PathOutcome::Acyclic(path) => (path, None),
            PathOutcome::CycleDetected { path, cycle } => {
                if self.strict_cycles {
                    return Err(EngineError::CycleDetected { cycle });
                }
                (path, Some(cycle))
            }
        };

        let result = BuildResult {
            graph,
            critical_path,
            cycle,
            renderer: self.renderer.clone(),
        };
        log::info!(
            "Critical path: {} of {} tasks, {} days",
            result.critical_path.len(),
            result.graph.len(),
            result.total_duration()
        );
        Ok(result)
    }
}

/// One rendered view of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendering {
    pub format: Format,
    pub content: String,
}

impl Rendering {
    /// Write to `path`, creating missing directories
    pub fn write_to(&self, path: &Path) -> Result<(), EngineError> {
        write_rendering(path, &self.content)
    }
}

/// Output of [`Engine::build`]
#[derive(Debug, Clone)]
pub struct BuildResult {
    graph: TaskGraph,
    critical_path: Vec<TaskId>,
    cycle: Option<Vec<TaskId>>,
    renderer: Renderer,
}

impl BuildResult {
    /// Annotated tasks in input order
    pub fn tasks(&self) -> &[Task] {
        self.graph.tasks()
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    /// Critical path, root first
    pub fn critical_path(&self) -> &[TaskId] {
        &self.critical_path
    }

    /// Tasks of the critical path, root first
    pub fn critical_tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.critical_path
            .iter()
            .filter_map(|&id| self.graph.get_task(id))
    }

    pub fn is_critical(&self, id: TaskId) -> bool {
        self.critical_path.contains(&id)
    }

    /// Summed duration of the critical path
    pub fn total_duration(&self) -> u64 {
        self.critical_tasks().map(|t| u64::from(t.duration)).sum()
    }

    /// The dependency loop met during analysis, if any
    pub fn cycle(&self) -> Option<&[TaskId]> {
        self.cycle.as_deref()
    }

    pub fn render(&self, format: Format) -> Rendering {
        Rendering {
            format,
            content: self.renderer.render(&self.graph, &self.critical_path, format),
        }
    }

    pub fn renderings(&self, formats: &[Format]) -> Vec<Rendering> {
        formats.iter().map(|&format| self.render(format)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> TaskId {
        TaskId::from_index(n - 1)
    }

    #[test]
    fn test_build_chain() {
        let result = Engine::default()
            .build(&[
                TaskSpec::new("A"),
                TaskSpec::new("B").after("A"),
                TaskSpec::new("C").after("B"),
            ])
            .unwrap();

        assert_eq!(result.critical_path(), &[id(1), id(2), id(3)]);
        assert_eq!(result.total_duration(), 3);
        assert!(result.cycle().is_none());
        assert!(result.is_critical(id(2)));
    }

    #[test]
    fn test_empty_build() {
        let result = Engine::default().build(&[]).unwrap();
        assert!(result.tasks().is_empty());
        assert!(result.critical_path().is_empty());
        assert_eq!(result.total_duration(), 0);
        assert_eq!(result.render(Format::Json).content, "{\n  \"nodes\": [],\n  \"edges\": []\n}\n");
    }

    #[test]
    fn test_cycle_reported_leniently() {
        let specs = [
            TaskSpec::new("Root"),
            TaskSpec::new("A").after("Root").after("B"),
            TaskSpec::new("B").after("A"),
        ];
        let result = Engine::default().build(&specs).unwrap();
        assert_eq!(result.cycle(), Some([id(2), id(3)].as_slice()));
    }

    #[test]
    fn test_strict_cycles_fail() {
        let config = EngineConfig {
            strict_cycles: true,
            ..EngineConfig::default()
        };
        let specs = [TaskSpec::new("Root"), TaskSpec::new("Loop").after("Root").after("Loop")];
        let err = Engine::new(&config).build(&specs).unwrap_err();
        assert!(matches!(err, EngineError::CycleDetected { .. }));
    }

    #[test]
    fn test_strict_cycles_fail_without_roots() {
        let config = EngineConfig {
            strict_cycles: true,
            ..EngineConfig::default()
        };
        let specs = [TaskSpec::new("A").after("B"), TaskSpec::new("B").after("A")];
        let err = Engine::new(&config).build(&specs).unwrap_err();
        assert_eq!(err.to_string(), "Dependency cycle detected: task1 -> task2 -> task1");
    }

    #[test]
    fn test_strict_resolution_from_config() {
        let config = EngineConfig {
            strict_resolution: true,
            ..EngineConfig::default()
        };
        let specs = [TaskSpec::new("A").after("Ghost")];
        assert!(Engine::default().build(&specs).is_ok());
        assert!(matches!(
            Engine::new(&config).build(&specs),
            Err(EngineError::UnresolvedDependency { .. })
        ));
    }

    #[test]
    fn test_parallel_builds_share_engine() {
        let engine = &Engine::default();
        let plans: Vec<Vec<TaskSpec>> = (1..=4)
            .map(|n| (0..n).map(|i| TaskSpec::new(format!("T{i}")).effort(format!("{}", i * 2))).collect())
            .collect();

        let lengths: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = plans
                .iter()
                .map(|specs| scope.spawn(move || engine.build(specs).unwrap().tasks().len()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(lengths, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_plan_title_used_for_gantt() {
        let plan = Plan {
            title: Some("Relaunch".to_string()),
            tasks: vec![TaskSpec::new("Only")],
        };
        let result = Engine::default().build_plan(&plan).unwrap();
        assert!(result.render(Format::Gantt).content.contains("    title Relaunch\n"));
    }
}
