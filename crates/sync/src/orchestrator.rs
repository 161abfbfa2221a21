//! Build orchestrator: loads rules once and fans them out to every selected adapter.

use crate::adapters::{AgentAdapter, BuildContext};
use crate::error::BuildError;
use crate::fingerprint::{compute_fingerprint, persist_fingerprint};
use crate::metadata::{stamp_metadata, META_FILE};
use crate::registry::AgentRegistry;
use crate::report::{AgentReport, AgentStatus, BuildReport, SkipReason};
use crate::rules::{load_rule_files, RuleFile};
use crate::Result;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use time::OffsetDateTime;

/// Source directory used when none is configured.
pub const DEFAULT_SOURCE_DIR: &str = ".rules";

/// Parameters for a build.
///
/// ```
/// use aimap_sync::BuildParams;
///
/// let params = BuildParams { dry_run: true, ..Default::default() };
/// assert_eq!(params.source_dir.to_str(), Some(".rules"));
/// assert!(params.agents.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildParams {
    /// Rule source directory, relative to `root` unless absolute
    pub source_dir: PathBuf,
    /// Project root that adapter outputs are written under
    pub root: PathBuf,
    /// Agents to build, in order. `None` builds every registered agent.
    pub agents: Option<Vec<String>>,
    /// Compute everything, write nothing
    pub dry_run: bool,
    /// Emit per-file progress at info level
    pub verbose: bool,
}

impl Default for BuildParams {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            root: PathBuf::from("."),
            agents: None,
            dry_run: false,
            verbose: false,
        }
    }
}

/// Runs builds against a registry.
pub struct BuildOrchestrator<'r> {
    registry: &'r AgentRegistry,
    params: BuildParams,
}

/// Swaps the stamped metadata text into the loaded files.
///
/// The stamp is an annotation, not a build step: when it fails the files
/// stay as loaded and the build goes on.
fn apply_stamp(files: &mut [RuleFile], stamped: Result<Option<String>>) {
    match stamped {
        Ok(Some(text)) => {
            if let Some(meta) = files.iter_mut().find(|f| f.name == META_FILE) {
                meta.content = text;
            }
        }
        Ok(None) => {}
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "Failed to stamp metadata, continuing");
        }
    }
}

impl<'r> BuildOrchestrator<'r> {
    pub fn new(registry: &'r AgentRegistry, params: BuildParams) -> Self {
        Self { registry, params }
    }

    pub fn params(&self) -> &BuildParams {
        &self.params
    }

    /// Agent ids this build will attempt, duplicates removed, order kept.
    pub fn selected_ids(&self) -> Vec<String> {
        let requested = match &self.params.agents {
            Some(agents) => agents.clone(),
            None => self.registry.list_ids(),
        };
        let mut seen = HashSet::new();
        requested
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect()
    }

    /// Runs the build.
    ///
    /// Fails only when the source directory is missing or holds no rule
    /// files. Every per-agent problem is recorded in the returned report.
    pub fn build(&self) -> Result<BuildReport> {
        let params = &self.params;
        let source_dir = params.root.join(&params.source_dir);
        if !source_dir.is_dir() {
            return Err(BuildError::SourceNotFound { path: source_dir }.into());
        }

        let mut files = load_rule_files(&source_dir)?;
        if files.is_empty() {
            return Err(BuildError::NoRuleFiles { path: source_dir }.into());
        }
        tracing::info!(
            source = %source_dir.display(),
            files = files.len(),
            dry_run = params.dry_run,
            "Loaded rule files"
        );

        let pre_stamp = compute_fingerprint(&files);
        let now = OffsetDateTime::now_utc();
        let stamped = stamp_metadata(&source_dir, &pre_stamp, now, params.dry_run);
        apply_stamp(&mut files, stamped);

        let ctx = BuildContext {
            root: params.root.clone(),
            source_dir: source_dir.clone(),
            files,
            dry_run: params.dry_run,
            verbose: params.verbose,
        };

        let agents: Vec<AgentReport> = self
            .selected_ids()
            .par_iter()
            .map(|id| self.build_agent(&ctx, id))
            .collect();

        let fingerprint = compute_fingerprint(&ctx.files);
        if !params.dry_run {
            if let Err(err) = persist_fingerprint(&source_dir, &fingerprint) {
                tracing::warn!(error = %err, "Failed to persist build fingerprint");
            }
        }

        let mut report = BuildReport {
            source_dir: params.source_dir.clone(),
            files: ctx.files.iter().map(|f| f.name.clone()).collect(),
            dry_run: params.dry_run,
            fingerprint,
            agents,
            success: true,
            summary: String::new(),
        };
        tracing::info!(
            built = report.built().count(),
            failed = report.failed().count(),
            warnings = report.warnings().count(),
            "Build complete"
        );
        report.summary = report.format_summary();
        Ok(report)
    }

    /// Clean-then-build for one agent. Never fails; problems land in the report.
    fn build_agent(&self, ctx: &BuildContext, id: &str) -> AgentReport {
        let Some(adapter): Option<&dyn AgentAdapter> = self.registry.get(id) else {
            tracing::warn!(agent = %id, "Unknown agent, skipping");
            return AgentReport::unknown(id);
        };

        let mut report = AgentReport::for_adapter(adapter);
        ctx.progress(&format!("Building {}", adapter.display_name()));

        if !ctx.dry_run {
            if let Err(err) = adapter.clean(ctx) {
                tracing::debug!(agent = %id, error = %err, "Clean failed, building anyway");
                report.skipped.push(SkipReason::CleanFailed {
                    agent: id.to_string(),
                    error: format!("{err:#}"),
                });
            }
        }

        match adapter.build(ctx) {
            Ok(written) => {
                tracing::debug!(agent = %id, files = written.written.len(), "Agent built");
                report.written = written.written;
                report.warnings = written.warnings;
            }
            Err(err) => {
                tracing::warn!(
                    agent = %id,
                    error = %err,
                    "Failed to build {}",
                    adapter.display_name()
                );
                report.status = AgentStatus::Failed {
                    error: format!("{err:#}"),
                };
            }
        }
        report
    }
}
