//! Plan files - the ordered task list handed to the engine
//!
//! ```yaml
//! title: Website relaunch
//! tasks:
//!   - name: Setup
//!     phase: Foundation
//!     effort: 3 story points
//!   - name: Build
//!     phase: Delivery
//!     effort: 13 story points
//!     depends_on: [Setup]
//! ```

use crate::core::TaskSpec;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

impl Plan {
    /// Load a plan; `.json` files are read as JSON, anything else as YAML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let plan = if is_json {
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON plan {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML plan {}", path.display()))?
        };
        Ok(plan)
    }

    /// File stem used to name rendered outputs
    pub fn stem(path: &Path) -> String {
        path.file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("plan")
            .to_string()
    }
}
