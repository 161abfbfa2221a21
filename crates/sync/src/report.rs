//! Build reporting types: what each adapter wrote, warned about, or skipped.

use crate::adapters::AgentAdapter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Reasons an agent (or part of its work) was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SkipReason {
    /// Requested agent id has no registered adapter
    UnknownAgent { id: String },
    /// Removing previous outputs failed; the build went ahead anyway
    CleanFailed { agent: String, error: String },
}

impl SkipReason {
    /// Returns a human-readable description of the skip reason.
    pub fn description(&self) -> String {
        match self {
            Self::UnknownAgent { id } => format!("Unknown agent: {}", id),
            Self::CleanFailed { agent, error } => {
                format!("Could not clean previous {} outputs: {}", agent, error)
            }
        }
    }

    /// Returns actionable guidance for the user.
    pub fn guidance(&self) -> Option<&str> {
        match self {
            Self::UnknownAgent { .. } => {
                Some("Check the agent list in .aimap.yml or --agents against `aimap agents`")
            }
            Self::CleanFailed { .. } => None,
        }
    }
}

/// Non-fatal problems found while rendering an agent's outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BuildWarning {
    /// Output is at or above 90% of the target tool's size ceiling
    SizeApproaching {
        path: PathBuf,
        size: usize,
        limit: usize,
    },
    /// Output is at or above the ceiling; written anyway
    SizeExceeded {
        path: PathBuf,
        size: usize,
        limit: usize,
        consequence: String,
    },
    /// Existing config could not be parsed and was replaced
    ExistingConfigUnparsable { path: PathBuf, error: String },
}

impl BuildWarning {
    /// Returns a human-readable description of the warning.
    pub fn description(&self) -> String {
        match self {
            Self::SizeApproaching { path, size, limit } => format!(
                "{} is {} bytes, approaching {} byte limit (over 90% of {} byte limit)",
                path.display(),
                size,
                limit,
                limit
            ),
            Self::SizeExceeded {
                path,
                size,
                limit,
                consequence,
            } => format!(
                "{} is {} bytes and exceeds {} byte limit. {}",
                path.display(),
                size,
                limit,
                consequence
            ),
            Self::ExistingConfigUnparsable { path, error } => format!(
                "Could not parse existing {} ({}); starting from an empty document",
                path.display(),
                error
            ),
        }
    }
}

/// What a single adapter build produced.
///
/// In dry-run mode `written` lists the files that would have been written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteReport {
    /// Files written, relative to the project root
    pub written: Vec<PathBuf>,
    /// Non-fatal warnings
    pub warnings: Vec<BuildWarning>,
}

impl WriteReport {
    /// Records a warning and logs it.
    pub fn warn(&mut self, warning: BuildWarning) {
        tracing::warn!("{}", warning.description());
        self.warnings.push(warning);
    }
}

/// Outcome of one agent in a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AgentStatus {
    Built,
    Failed { error: String },
    Unknown,
}

/// Per-agent section of a [`BuildReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReport {
    pub id: String,
    pub display_name: Option<String>,
    pub status: AgentStatus,
    /// Declared output paths of the adapter
    pub output_paths: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    pub warnings: Vec<BuildWarning>,
    pub skipped: Vec<SkipReason>,
}

impl AgentReport {
    pub(crate) fn for_adapter(adapter: &dyn AgentAdapter) -> Self {
        Self {
            id: adapter.id().to_string(),
            display_name: Some(adapter.display_name().to_string()),
            status: AgentStatus::Built,
            output_paths: adapter.output_paths(),
            written: Vec::new(),
            warnings: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) fn unknown(id: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: None,
            status: AgentStatus::Unknown,
            output_paths: Vec::new(),
            written: Vec::new(),
            warnings: Vec::new(),
            skipped: vec![SkipReason::UnknownAgent { id: id.to_string() }],
        }
    }

    /// Name to show the user.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }

    pub fn is_built(&self) -> bool {
        self.status == AgentStatus::Built
    }
}

/// Complete build report across all selected agents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildReport {
    /// Source directory as configured
    pub source_dir: PathBuf,
    /// Names of the loaded rule files, in build order
    pub files: Vec<String>,
    pub dry_run: bool,
    /// Fingerprint persisted (or, in dry-run, computed) at the end of the build
    pub fingerprint: String,
    pub agents: Vec<AgentReport>,
    /// The build ran to completion. Individual agents may still have failed.
    pub success: bool,
    /// Summary message
    pub summary: String,
}

impl BuildReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Agents that built without error.
    pub fn built(&self) -> impl Iterator<Item = &AgentReport> {
        self.agents.iter().filter(|a| a.is_built())
    }

    /// Agents whose build failed.
    pub fn failed(&self) -> impl Iterator<Item = &AgentReport> {
        self.agents
            .iter()
            .filter(|a| matches!(a.status, AgentStatus::Failed { .. }))
    }

    /// All warnings across agents.
    pub fn warnings(&self) -> impl Iterator<Item = &BuildWarning> {
        self.agents.iter().flat_map(|a| a.warnings.iter())
    }

    /// All skip reasons across agents.
    pub fn skipped(&self) -> impl Iterator<Item = &SkipReason> {
        self.agents.iter().flat_map(|a| a.skipped.iter())
    }

    /// Generates a formatted summary for display.
    pub fn format_summary(&self) -> String {
        let ids: Vec<&str> = self.agents.iter().map(|a| a.id.as_str()).collect();
        let mut out = String::new();
        out.push_str("Build Summary:\n");
        out.push_str(&format!("  Source: {}\n", self.source_dir.display()));
        out.push_str(&format!("  Files:  {}\n", self.file_count()));
        out.push_str(&format!("  Agents: {}\n", ids.join(", ")));

        let failed: Vec<&AgentReport> = self.failed().collect();
        if !failed.is_empty() {
            out.push_str(&format!("  Failed: {}\n", failed.len()));
            for agent in failed {
                if let AgentStatus::Failed { error } = &agent.status {
                    out.push_str(&format!("    - {}: {}\n", agent.label(), error));
                }
            }
        }

        let skipped: Vec<&SkipReason> = self.skipped().collect();
        if !skipped.is_empty() {
            out.push_str(&format!("  Skipped: {}\n", skipped.len()));
            for reason in skipped {
                out.push_str(&format!("    - {}\n", reason.description()));
            }
        }

        let warning_count = self.warnings().count();
        if warning_count > 0 {
            out.push_str(&format!("  Warnings: {}\n", warning_count));
        }

        if self.dry_run {
            out.push_str("\nThis was a dry run. No files were actually created.\n");
        } else {
            out.push_str("\nGenerated outputs:\n");
            for agent in self.built() {
                for path in &agent.output_paths {
                    out.push_str(&format!("  {} - {}\n", path.display(), agent.label()));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(id: &str, status: AgentStatus) -> AgentReport {
        AgentReport {
            id: id.to_string(),
            display_name: Some(id.to_uppercase()),
            status,
            output_paths: vec![PathBuf::from(format!("{id}.md"))],
            written: Vec::new(),
            warnings: Vec::new(),
            skipped: Vec::new(),
        }
    }

    #[test]
    fn summary_lists_outputs_of_built_agents_only() {
        let report = BuildReport {
            source_dir: PathBuf::from(".rules"),
            files: vec!["01-a.md".into(), "02-b.md".into()],
            agents: vec![
                agent("claude", AgentStatus::Built),
                agent(
                    "broken",
                    AgentStatus::Failed {
                        error: "disk full".into(),
                    },
                ),
                AgentReport::unknown("nope"),
            ],
            success: true,
            ..Default::default()
        };

        let summary = report.format_summary();
        assert!(summary.contains("Source: .rules"));
        assert!(summary.contains("Files:  2"));
        assert!(summary.contains("Agents: claude, broken, nope"));
        assert!(summary.contains("BROKEN: disk full"));
        assert!(summary.contains("Unknown agent: nope"));
        assert!(summary.contains("claude.md - CLAUDE"));
        assert!(!summary.contains("broken.md"));
    }

    #[test]
    fn dry_run_summary_lists_no_outputs() {
        let report = BuildReport {
            source_dir: PathBuf::from(".rules"),
            dry_run: true,
            agents: vec![agent("claude", AgentStatus::Built)],
            ..Default::default()
        };
        let summary = report.format_summary();
        assert!(summary.contains("dry run"));
        assert!(!summary.contains("claude.md"));
    }

    #[test]
    fn size_warning_descriptions() {
        let approaching = BuildWarning::SizeApproaching {
            path: PathBuf::from(".windsurfrules"),
            size: 5500,
            limit: 6000,
        };
        assert!(approaching
            .description()
            .contains("approaching 6000 byte limit"));
        assert!(approaching.description().contains("90% of 6000 byte limit"));

        let exceeded = BuildWarning::SizeExceeded {
            path: PathBuf::from(".amazonq/rules/04-large.md"),
            size: 33000,
            limit: 32768,
            consequence: "Amazon Q may truncate it.".into(),
        };
        assert!(exceeded.description().contains("exceeds 32768 byte limit"));
    }

    #[test]
    fn unknown_agent_report_carries_skip_reason() {
        let report = AgentReport::unknown("mystery");
        assert_eq!(report.status, AgentStatus::Unknown);
        assert_eq!(report.label(), "mystery");
        assert_eq!(
            report.skipped,
            vec![SkipReason::UnknownAgent {
                id: "mystery".into()
            }]
        );
        assert!(report.skipped[0].guidance().is_some());
    }
}
