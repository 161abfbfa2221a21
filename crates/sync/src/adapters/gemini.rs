//! Gemini CLI adapter: all rules concatenated into `GEMINI.md`.

use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for Gemini CLI.
pub struct GeminiAdapter {
    output: PathBuf,
}

impl GeminiAdapter {
    pub const ID: &'static str = "gemini";
    pub const DEFAULT_OUTPUT: &'static str = "GEMINI.md";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for GeminiAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for GeminiAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Gemini CLI"
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
