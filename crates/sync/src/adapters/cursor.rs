//! Cursor IDE adapter: `.mdc` project rules plus the legacy `.cursorrules`.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::{fan_out, join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Single-file format read by older Cursor releases.
pub const LEGACY_RULES_FILE: &str = ".cursorrules";

/// Adapter for Cursor IDE.
pub struct CursorAdapter {
    dir: PathBuf,
}

impl CursorAdapter {
    pub const ID: &'static str = "cursor";
    pub const DEFAULT_OUTPUT: &'static str = ".cursor/rules";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for CursorAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for CursorAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Cursor IDE"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![dir_pattern(&self.dir), PathBuf::from(LEGACY_RULES_FILE)]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        fan_out(ctx, &mut report, &self.dir, |file| {
            (format!("{}.mdc", file.stem()), Cow::Borrowed(file.content.as_str()))
        })?;

        let legacy = Path::new(LEGACY_RULES_FILE);
        ctx.write_file(&mut report, legacy, &join_markdown(ctx, PARAGRAPH_SEPARATOR))?;
        ctx.progress(&format!("Created {} (legacy)", legacy.display()));
        Ok(report)
    }
}
