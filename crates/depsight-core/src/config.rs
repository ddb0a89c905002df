use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use depsight_util::errors::DepsightError;
use serde::{Deserialize, Serialize};

/// Global user configuration loaded from `~/.depsight/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub insight: InsightConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Ordering and rendering defaults from `[insight]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightConfig {
    #[serde(default)]
    pub scheme: VersionScheme,
    /// Maximum depth of the dependents chain printed under each edge.
    #[serde(default)]
    pub depth: Option<usize>,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Which version semantics the ordering uses for module versions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionScheme {
    #[default]
    Maven,
    Semver,
}

impl FromStr for VersionScheme {
    type Err = DepsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "maven" | "gradle" => Ok(Self::Maven),
            "semver" => Ok(Self::Semver),
            other => Err(DepsightError::Config {
                message: format!("Unknown version scheme '{other}' (expected maven or semver)"),
            }),
        }
    }
}

impl fmt::Display for VersionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maven => f.write_str("maven"),
            Self::Semver => f.write_str("semver"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DepsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(DepsightError::Config {
                message: format!("Unknown output format '{other}' (expected text or json)"),
            }),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.depsight/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> Result<Self, DepsightError> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from an explicit path, returning defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, DepsightError> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| DepsightError::Config {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| DepsightError::Config {
            message: format!("Failed to parse global config: {e}"),
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the depsight data directory (`~/.depsight/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".depsight")
}
