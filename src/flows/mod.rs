//! Flow definitions - registration wizards as plain-text YAML files
//!
//! A flow file pairs a wizard shell (title, theme, badge) with an ordered
//! step list. Three builtin flows ship embedded in the binary; additional
//! flows are discovered from a directory on disk.

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::core::wizard::{ShellConfig, StepDef, Theme};

#[derive(Embed)]
#[folder = "flows/"]
struct BuiltinFlows;

/// One step entry in a flow file.
///
/// `optional` is a host-level annotation marking steps the runner may
/// disable mid-flow; the core step model never sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowStep {
    pub id: String,
    pub label: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub optional: bool,
}

fn default_enabled() -> bool {
    true
}

/// A registration flow definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub title: String,
    pub theme: Theme,
    #[serde(default)]
    pub badge: Option<String>,
    pub steps: Vec<FlowStep>,
}

fn default_version() -> u32 {
    1
}

impl FlowFile {
    /// Parse a flow definition from YAML
    pub fn parse(contents: &str) -> Result<Self, FlowLoadError> {
        serde_yml::from_str(contents).map_err(|e| FlowLoadError::Yaml {
            message: e.to_string(),
        })
    }

    /// Load a flow definition from a YAML file on disk
    pub fn load(path: &Path) -> Result<Self, FlowLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// The wizard shell this flow describes
    pub fn shell(&self) -> ShellConfig {
        ShellConfig {
            title: self.title.clone(),
            theme: self.theme,
            badge: self.badge.clone(),
        }
    }

    /// Step definitions for the core wizard machine
    pub fn step_defs(&self) -> Vec<StepDef> {
        self.steps
            .iter()
            .map(|s| StepDef {
                id: s.id.clone(),
                label: s.label.clone(),
                enabled: s.enabled,
            })
            .collect()
    }

    /// Ids of steps the host may disable mid-flow
    pub fn optional_ids(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.optional)
            .map(|s| s.id.as_str())
            .collect()
    }
}

/// Errors loading a flow definition
#[derive(Debug, Error)]
pub enum FlowLoadError {
    #[error("unknown flow '{0}' (not a builtin flow or a readable file)")]
    UnknownFlow(String),

    #[error("failed to parse flow YAML: {message}")]
    Yaml { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a builtin flow by name, `Ok(None)` when no such builtin exists
pub fn builtin(name: &str) -> Result<Option<FlowFile>, FlowLoadError> {
    match BuiltinFlows::get(&format!("{name}.yaml")) {
        Some(file) => {
            let contents = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            FlowFile::parse(&contents).map(Some)
        }
        None => Ok(None),
    }
}

/// Names of the builtin flows, sorted
pub fn builtin_names() -> Vec<String> {
    let mut names: Vec<String> = BuiltinFlows::iter()
        .filter_map(|f| f.as_ref().strip_suffix(".yaml").map(String::from))
        .collect();
    names.sort();
    names
}

/// Resolve a flow argument: a builtin name first, then a path on disk
pub fn resolve(name_or_path: &str) -> Result<FlowFile, FlowLoadError> {
    if let Some(flow) = builtin(name_or_path)? {
        return Ok(flow);
    }

    let path = Path::new(name_or_path);
    if path.is_file() {
        return FlowFile::load(path);
    }

    Err(FlowLoadError::UnknownFlow(name_or_path.to_string()))
}

/// Discover flow files (`.yaml`/`.yml`) under a directory, sorted by path
pub fn discover(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(2)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map_or(false, |ext| ext == "yaml" || ext == "yml")
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}
