//! Claude Code adapter: `CLAUDE.md` referencing rule files by path.
//!
//! Claude Code expands `@path` lines itself, so the rules are linked rather
//! than copied. A project may provide a template with a `@@RULES@@`
//! placeholder to surround the list with its own text.

use super::traits::{AgentAdapter, BuildContext};
use crate::report::WriteReport;
use crate::Result;
use std::path::{Path, PathBuf};

/// Template file looked up at the project root.
pub const TEMPLATE_FILE: &str = "CLAUDE.template.md";

/// Misspelled template name still honored for older projects.
pub const LEGACY_TEMPLATE_FILE: &str = "CLAUDE.tempalte.md";

/// Placeholder replaced by the reference list.
pub const RULES_PLACEHOLDER: &str = "@@RULES@@";

/// Adapter for Claude Code.
pub struct ClaudeAdapter {
    output: PathBuf,
}

impl ClaudeAdapter {
    pub const ID: &'static str = "claude";
    pub const DEFAULT_OUTPUT: &'static str = "CLAUDE.md";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn load_template(&self, ctx: &BuildContext) -> Result<Option<String>> {
        for name in [TEMPLATE_FILE, LEGACY_TEMPLATE_FILE] {
            if let Some(template) = ctx.read_existing(Path::new(name))? {
                tracing::debug!(template = name, "Using Claude template");
                return Ok(Some(template));
            }
        }
        Ok(None)
    }
}

impl Default for ClaudeAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for ClaudeAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Claude Code"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        let references = ctx
            .markdown_files()
            .map(|file| format!("- @{}", ctx.reference(file)))
            .collect::<Vec<_>>()
            .join("\n");

        let content = match self.load_template(ctx)? {
            Some(template) => template.replacen(RULES_PLACEHOLDER, &references, 1),
            None => references,
        };

        ctx.write_file(&mut report, &self.output, &content)?;
        ctx.progress(&format!("Created {}", self.output.display()));
        Ok(report)
    }
}
