//! Shared rendering helpers for agent adapters.

use super::traits::BuildContext;
use crate::report::{BuildWarning, WriteReport};
use crate::rules::RuleFile;
use crate::Result;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Separator between concatenated rules.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Separator that also draws a horizontal rule between concatenated rules.
pub const RULE_SEPARATOR: &str = "\n\n---\n\n";

/// Joins the content of every markdown rule with `separator`.
pub fn join_markdown(ctx: &BuildContext, separator: &str) -> String {
    ctx.markdown_files()
        .map(|f| f.content.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Picks the configured override for an adapter, or its default output.
pub fn output_or(overrides: &super::OutputOverrides, id: &str, default: &str) -> PathBuf {
    overrides
        .get(id)
        .cloned()
        .unwrap_or_else(|| PathBuf::from(default))
}

/// A byte-size ceiling imposed by a target tool.
///
/// Content below 90% of `limit` is fine. From 90% up to the limit a
/// [`BuildWarning::SizeApproaching`] is raised; at or above it a
/// [`BuildWarning::SizeExceeded`] carrying `consequence`. Either way the
/// content is still written.
#[derive(Debug, Clone, Copy)]
pub struct SizeLimit {
    pub limit: usize,
    pub consequence: &'static str,
}

impl SizeLimit {
    pub const fn new(limit: usize, consequence: &'static str) -> Self {
        Self { limit, consequence }
    }

    /// Size from which the approaching warning fires.
    pub fn warn_threshold(&self) -> usize {
        self.limit * 9 / 10
    }

    /// Returns the warning for `size` bytes written to `path`, if any.
    pub fn check(&self, path: &Path, size: usize) -> Option<BuildWarning> {
        if size >= self.limit {
            Some(BuildWarning::SizeExceeded {
                path: path.to_path_buf(),
                size,
                limit: self.limit,
                consequence: self.consequence.to_string(),
            })
        } else if size >= self.warn_threshold() {
            Some(BuildWarning::SizeApproaching {
                path: path.to_path_buf(),
                size,
                limit: self.limit,
            })
        } else {
            None
        }
    }
}

/// Copies every markdown rule into `dir`, one file per rule.
///
/// `render` maps a rule to its output file name and content.
pub fn fan_out<'a, F>(
    ctx: &'a BuildContext,
    report: &mut WriteReport,
    dir: &Path,
    render: F,
) -> Result<()>
where
    F: Fn(&'a RuleFile) -> (String, Cow<'a, str>),
{
    for file in ctx.markdown_files() {
        let (name, content) = render(file);
        let target = dir.join(name);
        ctx.write_file(report, &target, &content)?;
        ctx.progress(&format!("Created {}", target.display()));
    }
    Ok(())
}

/// Renderer for [`fan_out`] that keeps name and content unchanged.
pub fn verbatim(file: &RuleFile) -> (String, Cow<'_, str>) {
    (file.name.clone(), Cow::Borrowed(file.content.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn context() -> BuildContext {
        BuildContext::new(
            "/project",
            ".rules",
            vec![
                RuleFile::new("00-meta.yaml", "/project/.rules/00-meta.yaml", "version: 1"),
                RuleFile::new("01-a.md", "/project/.rules/01-a.md", "# A"),
                RuleFile::new("02-b.md", "/project/.rules/02-b.md", "# B"),
            ],
        )
    }

    #[test]
    fn join_skips_non_markdown() {
        let ctx = context();
        assert_eq!(join_markdown(&ctx, PARAGRAPH_SEPARATOR), "# A\n\n# B");
        assert_eq!(join_markdown(&ctx, RULE_SEPARATOR), "# A\n\n---\n\n# B");
    }

    #[test]
    fn size_limit_boundaries() {
        let limit = SizeLimit::new(6000, "ignored");
        let path = Path::new("out");
        assert_eq!(limit.warn_threshold(), 5400);
        assert_eq!(limit.check(path, 5399), None);
        assert!(matches!(
            limit.check(path, 5400),
            Some(BuildWarning::SizeApproaching { size: 5400, .. })
        ));
        assert!(matches!(
            limit.check(path, 5999),
            Some(BuildWarning::SizeApproaching { .. })
        ));
        assert!(matches!(
            limit.check(path, 6000),
            Some(BuildWarning::SizeExceeded { limit: 6000, .. })
        ));
    }

    #[test]
    fn override_replaces_default() {
        let mut overrides = BTreeMap::new();
        overrides.insert("claude".to_string(), PathBuf::from("docs/CLAUDE.md"));
        assert_eq!(
            output_or(&overrides, "claude", "CLAUDE.md"),
            PathBuf::from("docs/CLAUDE.md")
        );
        assert_eq!(
            output_or(&overrides, "codex", "CODEX.md"),
            PathBuf::from("CODEX.md")
        );
    }
}
