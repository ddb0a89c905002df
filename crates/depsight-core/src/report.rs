use std::path::Path;

use depsight_util::errors::DepsightError;
use serde::{Deserialize, Serialize};

use crate::edge::DependencyEdge;

/// A collection of dependency edges exported by a resolution engine.
///
/// Written as repeated `[[edge]]` tables in TOML, or an object with an
/// `edge` array in JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeReport {
    #[serde(default)]
    pub edge: Vec<DependencyEdge>,
}

impl EdgeReport {
    pub fn new(edges: Vec<DependencyEdge>) -> Self {
        Self { edge: edges }
    }

    /// Load a report, picking JSON for `.json` files and TOML otherwise.
    pub fn from_path(path: &Path) -> Result<Self, DepsightError> {
        let content = std::fs::read_to_string(path).map_err(|e| DepsightError::Report {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let report = if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }?;
        tracing::debug!(
            "Loaded {} edges from {}",
            report.edge.len(),
            path.display()
        );
        Ok(report)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DepsightError> {
        toml::from_str(content).map_err(|e| DepsightError::Report {
            message: format!("Failed to parse edge report: {e}"),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, DepsightError> {
        serde_json::from_str(content).map_err(|e| DepsightError::Report {
            message: format!("Failed to parse edge report: {e}"),
        })
    }

    /// Serialize the report to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        self.edge.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edge.is_empty()
    }
}
