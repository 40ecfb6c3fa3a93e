//! Structured node/edge document

use crate::core::{TaskGraph, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Serialized form of the graph: exactly `nodes` and `edges`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<DocumentNode>,
    pub edges: Vec<DocumentEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub duration: u32,
    pub critical: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEdge {
    pub source: String,
    pub target: String,
}

impl GraphDocument {
    pub fn from_graph(graph: &TaskGraph, critical: &HashSet<TaskId>) -> Self {
        let nodes = graph
            .tasks()
            .iter()
            .map(|task| DocumentNode {
                id: task.id.to_string(),
                name: task.name.clone(),
                phase: task.phase.clone(),
                duration: task.duration,
                critical: critical.contains(&task.id),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|(from, to)| DocumentEdge {
                source: from.to_string(),
                target: to.to_string(),
            })
            .collect();

        Self { nodes, edges }
    }
}

pub(super) fn render(graph: &TaskGraph, critical: &HashSet<TaskId>) -> String {
    let document = GraphDocument::from_graph(graph, critical);
    // Plain structs of strings and integers always serialize
    let mut json = serde_json::to_string_pretty(&document).unwrap_or_default();
    json.push('\n');
    json
}
