//! Codex adapter: all rules concatenated into `CODEX.md`.

use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Adapter for the Codex CLI, which reads a single markdown file.
pub struct CodexAdapter {
    output: PathBuf,
}

impl CodexAdapter {
    pub const ID: &'static str = "codex";
    pub const DEFAULT_OUTPUT: &'static str = "CODEX.md";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for CodexAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for CodexAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Codex"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleFile;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn concatenates_in_name_order_with_blank_line() {
        let dir = tempdir().unwrap();
        let ctx = BuildContext::new(
            dir.path(),
            ".rules",
            vec![
                RuleFile::new("01-a.md", dir.path().join(".rules/01-a.md"), "# A"),
                RuleFile::new("02-b.md", dir.path().join(".rules/02-b.md"), "# B"),
            ],
        );

        CodexAdapter::default().build(&ctx).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("CODEX.md")).unwrap(),
            "# A\n\n# B"
        );
    }
}
