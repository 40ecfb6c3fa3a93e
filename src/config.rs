//! Engine configuration - loaded from taskpath.yml

use crate::render::{Format, Renderer};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "taskpath.yml";

/// Engine options
///
/// ```yaml
/// strict_resolution: false
/// strict_cycles: false
/// chart_title: Project Plan
/// date_format: YYYY-MM-DD
/// formats: [gantt, flowchart, json]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fail on dependency names that match no task instead of dropping them
    pub strict_resolution: bool,
    /// Fail when the dependency graph contains a cycle
    pub strict_cycles: bool,
    /// Gantt title, used when the plan carries none
    pub chart_title: String,
    pub date_format: String,
    /// Formats rendered when none are requested explicitly
    pub formats: Vec<Format>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let renderer = Renderer::default();
        Self {
            strict_resolution: false,
            strict_cycles: false,
            chart_title: renderer.title,
            date_format: renderer.date_format,
            formats: vec![Format::Gantt, Format::Flowchart, Format::Json],
        }
    }
}

impl EngineConfig {
    /// Load config from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: EngineConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// User-level config location
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("taskpath").join("config.yml"))
    }

    /// Resolve configuration
    /// Priority:
    /// 1. explicit path (must exist)
    /// 2. ./taskpath.yml
    /// 3. <config dir>/taskpath/config.yml
    /// 4. defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG);
        if local.exists() {
            log::debug!("Using config {}", local.display());
            return Self::from_file(local);
        }

        if let Some(user) = Self::user_path().filter(|p| p.exists()) {
            log::debug!("Using config {}", user.display());
            return Self::from_file(&user);
        }

        Ok(Self::default())
    }

    /// Renderer settings, preferring the plan's own title
    pub fn renderer(&self, plan_title: Option<&str>) -> Renderer {
        Renderer::new(plan_title.unwrap_or(&self.chart_title), self.date_format.clone())
    }
}
