//! Universal Agents adapter: all rules concatenated into `AGENTS.md`.

use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, RULE_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for the tool-neutral `AGENTS.md` convention.
pub struct AgentsAdapter {
    output: PathBuf,
}

impl AgentsAdapter {
    pub const ID: &'static str = "agents";
    pub const DEFAULT_OUTPUT: &'static str = "AGENTS.md";

    /// Creates an adapter writing to `output`, relative to the project root.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for AgentsAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for AgentsAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Universal Agents"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        let content = join_markdown(ctx, RULE_SEPARATOR);
        ctx.write_file(&mut report, &self.output, &content)?;
        ctx.progress(&format!("Created {}", self.output.display()));
        Ok(report)
    }
}
