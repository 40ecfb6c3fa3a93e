//! Graph renderers - pure projections of one graph + critical path
//!
//! Every format is derived from the same [`TaskGraph`] edge set, so the gantt
//! `after` references, flowchart arrows, DOT edges and document edges always agree.

mod document;
mod dot;
mod flowchart;
mod gantt;

pub use document::{DocumentEdge, DocumentNode, GraphDocument};

use crate::core::{TaskGraph, TaskId};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// Mermaid gantt chart (network chart)
    Gantt,
    /// Mermaid flowchart
    Flowchart,
    /// JSON node/edge document
    Json,
    /// Graphviz DOT
    Dot,
}

impl Format {
    pub const ALL: [Format; 4] = [Self::Gantt, Self::Flowchart, Self::Json, Self::Dot];

    /// File extension used when writing this format next to a plan
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Gantt => "gantt.mmd",
            Self::Flowchart => "flow.mmd",
            Self::Json => "json",
            Self::Dot => "dot",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gantt => write!(f, "gantt"),
            Self::Flowchart => write!(f, "flowchart"),
            Self::Json => write!(f, "json"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

/// Chart settings shared by the text formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    pub title: String,
    pub date_format: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            title: "Project Plan".to_string(),
            date_format: "YYYY-MM-DD".to_string(),
        }
    }
}

impl Renderer {
    pub fn new(title: impl Into<String>, date_format: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date_format: date_format.into(),
        }
    }

    /// Render the graph in `format`
    pub fn render(&self, graph: &TaskGraph, critical_path: &[TaskId], format: Format) -> String {
        let critical: HashSet<TaskId> = critical_path.iter().copied().collect();
        match format {
            Format::Gantt => gantt::render(self, graph, &critical),
            Format::Flowchart => flowchart::render(graph, &critical),
            Format::Json => document::render(graph, &critical),
            Format::Dot => dot::render(graph, &critical),
        }
    }
}

/// Labels are written one per line; fold line breaks into spaces
fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Write a rendering to `path`, creating parent directories first
pub fn write_rendering(path: &Path, content: &str) -> Result<(), EngineError> {
    let to_error = |source| EngineError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
