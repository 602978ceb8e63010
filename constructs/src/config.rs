use crate::tags::Tag;
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings of one frontend deployment
///
/// Maps one2one from igvf.toml. Passed through unmodified to the stack
/// constructor and the tagging routine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Project name (used as a prefix for all resources)
    pub name: String,

    /// Branch the frontend bundle is built from
    pub branch: String,

    /// URL path prefix the frontend is served under
    pub url_prefix: String,

    /// Sizing of the frontend function
    pub frontend: Frontend,

    /// Tags attached to every stack of the deployment
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frontend {
    /// Memory in MB
    pub memory: u32,

    /// Timeout in seconds
    pub timeout: u32,
}

impl Default for Frontend {
    fn default() -> Self {
        Frontend {
            memory: 512,
            timeout: 30,
        }
    }
}

impl Config {
    pub fn from_path(path: &Path) -> eyre::Result<Self> {
        Ok(FileConfig::from_path(path)?.into())
    }
}

/// FileConfig is the structure of igvf.toml
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    /// [project]
    /// name = "igvf-ui"
    /// branch = "main"
    #[serde(default)]
    pub project: ProjectSection,

    /// [frontend]
    /// memory = 2048
    #[serde(default)]
    pub frontend: Frontend,

    /// [[tags]]
    /// key = "env"
    /// value = "demo"
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProjectSection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub branch: String,

    #[serde(default)]
    pub url_prefix: String,
}

impl FileConfig {
    fn from_path(path: &Path) -> eyre::Result<Self> {
        let toml_string = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config at {}", path.display()))?;

        toml::from_str(&toml_string).wrap_err("Failed to parse igvf.toml")
    }
}

impl From<FileConfig> for Config {
    fn from(cfg: FileConfig) -> Self {
        Config {
            name: cfg.project.name,
            branch: cfg.project.branch,
            url_prefix: cfg.project.url_prefix,
            frontend: cfg.frontend,
            tags: cfg.tags,
        }
    }
}
