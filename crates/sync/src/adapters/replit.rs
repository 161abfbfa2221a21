//! Replit AI adapter: all rules concatenated into `replit.md`.

use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for Replit AI.
///
/// Replit reads `replit.md` at the project root as agent context.
pub struct ReplitAdapter {
    output: PathBuf,
}

impl ReplitAdapter {
    pub const ID: &'static str = "replit";
    pub const DEFAULT_OUTPUT: &'static str = "replit.md";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for ReplitAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for ReplitAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Replit AI"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        let content = join_markdown(ctx, PARAGRAPH_SEPARATOR);
        ctx.write_file(&mut report, &self.output, &content)?;
        ctx.progress(&format!("Created {}", self.output.display()));
        Ok(report)
    }
}
