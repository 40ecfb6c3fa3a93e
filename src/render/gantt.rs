//! Mermaid gantt chart

use super::{single_line, Renderer};
use crate::core::{TaskGraph, TaskId};
use std::collections::HashSet;
use std::fmt::Write;

const UNGROUPED: &str = "Ungrouped";

pub(super) fn render(renderer: &Renderer, graph: &TaskGraph, critical: &HashSet<TaskId>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "gantt");
    let _ = writeln!(out, "    title {}", escape(&renderer.title));
    let _ = writeln!(out, "    dateFormat {}", renderer.date_format);

    // Sections follow input order: a heading each time the phase changes
    let mut current_phase: Option<&str> = None;

    for task in graph.tasks() {
        let phase = task.phase.as_str();
        if current_phase != Some(phase) {
            if current_phase.is_some() || !phase.is_empty() {
                let heading = if phase.is_empty() { UNGROUPED } else { phase };
                let _ = writeln!(out, "    section {}", escape(heading));
            }
            current_phase = Some(phase);
        }

        let marker = if critical.contains(&task.id) { "crit, " } else { "" };
        let start = if task.resolved_dependencies.is_empty() {
            String::new()
        } else {
            let preds: Vec<String> = task
                .resolved_dependencies
                .iter()
                .map(ToString::to_string)
                .collect();
            format!("after {}, ", preds.join(" "))
        };

        let _ = writeln!(
            out,
            "    {} :{}{}, {}{}d",
            escape(&task.name),
            marker,
            task.id,
            start,
            task.duration
        );
    }

    out
}

/// `:` and `#` split gantt task lines; replace them with Mermaid entity codes
fn escape(text: &str) -> String {
    single_line(text).replace('#', "#35;").replace(':', "#58;")
}
