//! Project configuration for aimap.
//!
//! Loads settings from `.aimap.yml` at the project root with the following
//! precedence: CLI arguments > environment variables > config file > defaults.
//! Clap resolves the first two; this module covers the rest.
//!
//! ## Configuration File Format
//!
//! ```yaml
//! # .aimap.yml
//! source: .rules
//! agents:
//!   - claude
//!   - cursor
//! outputs:
//!   claude: docs/CLAUDE.md
//! ```

use aimap_sync::{OutputOverrides, DEFAULT_SOURCE_DIR};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file name.
pub const CONFIG_FILE: &str = ".aimap.yml";

/// Agents built when neither the CLI nor the config file names any.
pub const DEFAULT_AGENTS: &[&str] = &[
    "claude", "cline", "roocode", "cursor", "windsurf", "codex", "copilot", "amazonq", "continue",
    "aider", "tabnine", "replit",
];

/// Contents of `.aimap.yml`. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AimapConfig {
    /// Rule source directory
    pub source: PathBuf,
    /// Agents to build, in order
    pub agents: Vec<String>,
    /// Per-agent primary output overrides
    pub outputs: OutputOverrides,
}

impl Default for AimapConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            agents: DEFAULT_AGENTS.iter().map(|a| a.to_string()).collect(),
            outputs: OutputOverrides::new(),
        }
    }
}

impl AimapConfig {
    /// Parses a config document. An empty document yields the defaults.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(value)?)
    }

    /// Loads the config file at `path`.
    ///
    /// A missing file yields the defaults. So does a file that cannot be
    /// read or parsed, after a warning; a broken config never stops a build.
    pub fn load(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Self::default();
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to read config, using defaults"
                );
                return Self::default();
            }
        };

        match Self::parse(&text) {
            Ok(config) => {
                tracing::debug!(
                    target: "aimap::config",
                    path = %path.display(),
                    "Loaded configuration file"
                );
                config
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "Failed to parse config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Source directory, preferring the one given on the command line.
    pub fn source_or(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.unwrap_or_else(|| self.source.clone())
    }

    /// Agent list, preferring a non-empty one given on the command line.
    pub fn agents_or(&self, cli: Vec<String>) -> Vec<String> {
        let cli: Vec<String> = cli
            .into_iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if cli.is_empty() {
            self.agents.clone()
        } else {
            cli
        }
    }
}
