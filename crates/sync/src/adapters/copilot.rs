//! GitHub Copilot adapter: path-scoped instruction files.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::fan_out;
use crate::report::WriteReport;
use crate::rules::RuleFile;
use crate::Result;
use std::borrow::Cow;
use std::path::PathBuf;

/// Front matter applying an instruction file to every path.
const APPLY_TO_ALL: &str = "---\napplyTo: \"**\"\n---\n\n";

/// Adapter for GitHub Copilot custom instructions.
///
/// Each rule becomes `<stem>.instructions.md`. Rules that already carry
/// front matter are copied unchanged.
pub struct CopilotAdapter {
    dir: PathBuf,
}

impl CopilotAdapter {
    pub const ID: &'static str = "copilot";
    pub const DEFAULT_OUTPUT: &'static str = ".github/instructions";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for CopilotAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

fn instruction_file(file: &RuleFile) -> (String, Cow<'_, str>) {
    let name = format!("{}.instructions.md", file.stem());
    if file.content.starts_with("---") {
        (name, Cow::Borrowed(file.content.as_str()))
    } else {
        (name, Cow::Owned(format!("{APPLY_TO_ALL}{}", file.content)))
    }
}

impl AgentAdapter for CopilotAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "GitHub Copilot"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![dir_pattern(&self.dir)]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        fan_out(ctx, &mut report, &self.dir, instruction_file)?;
        Ok(report)
    }
}
