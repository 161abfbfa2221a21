//! JetBrains AI Assistant adapter: one file per rule under `.aiassistant/rules/`.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::{fan_out, verbatim};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for JetBrains AI Assistant project rules.
pub struct JetBrainsAdapter {
    dir: PathBuf,
}

impl JetBrainsAdapter {
    pub const ID: &'static str = "jetbrains";
    pub const DEFAULT_OUTPUT: &'static str = ".aiassistant/rules";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for JetBrainsAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for JetBrainsAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "JetBrains AI Assistant"
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
