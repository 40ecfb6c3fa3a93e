//! Graphviz DOT output

use super::single_line;
use crate::core::{TaskGraph, TaskId};
use std::collections::HashSet;
use std::fmt::Write;

pub(super) fn render(graph: &TaskGraph, critical: &HashSet<TaskId>) -> String {
    let mut out = String::new();
    out.push_str("digraph taskpath {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  node [shape=box];\n\n");

    for task in graph.tasks() {
        let style = if critical.contains(&task.id) {
            ", style=filled, fillcolor=lightcoral"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  \"{}\" [label=\"{}\\n{}d\"{}];",
            task.id,
            escape(&task.name),
            task.duration,
            style
        );
    }

    out.push('\n');
    for (from, to) in graph.edges() {
        let _ = writeln!(out, "  \"{}\" -> \"{}\";", from, to);
    }

    out.push_str("}\n");
    out
}

fn escape(text: &str) -> String {
    single_line(text).replace('\\', "\\\\").replace('"', "\\\"")
}
