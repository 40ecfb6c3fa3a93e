//! Mermaid flowchart

use super::single_line;
use crate::core::{TaskGraph, TaskId};
use std::collections::HashSet;
use std::fmt::Write;

pub(super) fn render(graph: &TaskGraph, critical: &HashSet<TaskId>) -> String {
    let mut out = String::from("flowchart LR\n");

    for task in graph.tasks() {
        let label = single_line(&task.name).replace('"', "#quot;");
        let _ = writeln!(out, "    {}[\"{}<br/>{}d\"]", task.id, label, task.duration);
    }

    for (from, to) in graph.edges() {
        let _ = writeln!(out, "    {} --> {}", from, to);
    }

    let on_path: Vec<String> = graph
        .tasks()
        .iter()
        .filter(|t| critical.contains(&t.id))
        .map(|t| t.id.to_string())
        .collect();
    if !on_path.is_empty() {
        out.push_str("    classDef critical fill:#ffe0e0,stroke:#d32f2f,stroke-width:2px\n");
        let _ = writeln!(out, "    class {} critical", on_path.join(","));
    }

    out
}
