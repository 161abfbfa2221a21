//! RooCode adapter: one file per rule under `.roo/rules/`.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::{fan_out, verbatim};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for RooCode.
pub struct RooCodeAdapter {
    dir: PathBuf,
}

impl RooCodeAdapter {
    pub const ID: &'static str = "roocode";
    pub const DEFAULT_OUTPUT: &'static str = ".roo/rules";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for RooCodeAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for RooCodeAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "RooCode"
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
