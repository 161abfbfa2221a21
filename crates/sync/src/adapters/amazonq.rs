//! Amazon Q Developer adapter: one rule file per rule under `.amazonq/rules/`.

use super::traits::{dir_pattern, AgentAdapter, BuildContext};
use super::utils::SizeLimit;
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Per-file ceiling Amazon Q applies to project rules.
pub const AMAZONQ_LIMIT: SizeLimit =
    SizeLimit::new(32768, "Amazon Q may truncate or skip this rule file");

/// Adapter for Amazon Q Developer.
pub struct AmazonQAdapter {
    dir: PathBuf,
}

impl AmazonQAdapter {
    pub const ID: &'static str = "amazonq";
    pub const DEFAULT_OUTPUT: &'static str = ".amazonq/rules";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for AmazonQAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for AmazonQAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Amazon Q Developer"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![dir_pattern(&self.dir)]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        for file in ctx.markdown_files() {
            let target = self.dir.join(&file.name);
            if let Some(warning) = AMAZONQ_LIMIT.check(&target, file.content.len()) {
                report.warn(warning);
            }
            ctx.write_file(&mut report, &target, &file.content)?;
            ctx.progress(&format!("Created {}", target.display()));
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::BuildWarning;
    use crate::rules::RuleFile;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn limit_applies_per_file() {
        let dir = tempdir().unwrap();
        let source = dir.path().join(".rules");
        let ctx = BuildContext::new(
            dir.path(),
            ".rules",
            vec![
                RuleFile::new("01-small.md", source.join("01-small.md"), "# Small"),
                RuleFile::new("02-near.md", source.join("02-near.md"), "n".repeat(30000)),
                RuleFile::new("03-large.md", source.join("03-large.md"), "l".repeat(32768)),
            ],
        );

        let report = AmazonQAdapter::default().build(&ctx).unwrap();
        assert_eq!(report.written.len(), 3);
        assert_eq!(report.warnings.len(), 2);
        assert!(matches!(
            &report.warnings[0],
            BuildWarning::SizeApproaching { path, .. } if path.ends_with("02-near.md")
        ));
        assert!(matches!(
            &report.warnings[1],
            BuildWarning::SizeExceeded { path, limit: 32768, .. } if path.ends_with("03-large.md")
        ));
        assert_eq!(
            fs::read_to_string(dir.path().join(".amazonq/rules/03-large.md"))
                .unwrap()
                .len(),
            32768
        );
    }
}
