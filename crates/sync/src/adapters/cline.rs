//! Cline adapter: one file per rule under `.clinerules/`.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::{fan_out, verbatim};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for Cline.
///
/// Cline loads every file in `.clinerules/`, so rules are copied as-is.
pub struct ClineAdapter {
    dir: PathBuf,
}

impl ClineAdapter {
    pub const ID: &'static str = "cline";
    pub const DEFAULT_OUTPUT: &'static str = ".clinerules";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for ClineAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for ClineAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Cline"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![dir_pattern(&self.dir)]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        fan_out(ctx, &mut report, &self.dir, verbatim)?;
        Ok(report)
    }
}
