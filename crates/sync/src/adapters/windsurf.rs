//! Windsurf (Codeium) adapter: size-constrained `.windsurfrules`.

use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, SizeLimit, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use std::path::PathBuf;

/// Windsurf stops reading rules files past this size.
pub const WINDSURF_LIMIT: SizeLimit = SizeLimit::new(6000, "Windsurf will ignore the entire file");

/// Adapter for Windsurf/Codeium.
///
/// Oversized output is still written so the user can see and trim it; the
/// size problem surfaces as a build warning.
pub struct WindsurfAdapter {
    output: PathBuf,
}

impl WindsurfAdapter {
    pub const ID: &'static str = "windsurf";
    pub const DEFAULT_OUTPUT: &'static str = ".windsurfrules";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }
}

impl Default for WindsurfAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for WindsurfAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Windsurf/Codeium"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        let content = join_markdown(ctx, PARAGRAPH_SEPARATOR);

        if let Some(warning) = WINDSURF_LIMIT.check(&self.output, content.len()) {
            report.warn(warning);
        }

        ctx.write_file(&mut report, &self.output, &content)?;
        ctx.progress(&format!(
            "Created {} ({} bytes)",
            self.output.display(),
            content.len()
        ));
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

    fn build_with(content: String, dry_run: bool) -> (tempfile::TempDir, WriteReport) {
        let dir = tempdir().unwrap();
        let mut ctx = BuildContext::new(
            dir.path(),
            ".rules",
            vec![RuleFile::new("01-big.md", dir.path().join(".rules/01-big.md"), content)],
        );
        ctx.dry_run = dry_run;
        let report = WindsurfAdapter::default().build(&ctx).unwrap();
        (dir, report)
    }

    #[test]
    fn small_output_has_no_warning() {
        let (dir, report) = build_with("# Small".into(), false);
        assert!(report.warnings.is_empty());
        assert!(dir.path().join(".windsurfrules").exists());
    }

    #[test]
    fn approaching_limit_warns_once() {
        let (_dir, report) = build_with("x".repeat(5500), false);
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            report.warnings[0],
            BuildWarning::SizeApproaching {
                size: 5500,
                limit: 6000,
                ..
            }
        ));
    }

    #[test]
    fn over_limit_warns_and_still_writes() {
        let (dir, report) = build_with("x".repeat(6001), false);
        assert_eq!(report.warnings.len(), 1);
        let BuildWarning::SizeExceeded { consequence, .. } = &report.warnings[0] else {
            panic!("expected SizeExceeded, got {:?}", report.warnings[0]);
        };
        assert_eq!(consequence, "Windsurf will ignore the entire file");
        assert_eq!(
            fs::read_to_string(dir.path().join(".windsurfrules"))
                .unwrap()
                .len(),
            6001
        );
    }

    #[test]
    fn dry_run_computes_the_same_warnings() {
        let (dir, report) = build_with("x".repeat(6001), true);
        assert_eq!(report.warnings.len(), 1);
        assert!(!dir.path().join(".windsurfrules").exists());
    }
}
