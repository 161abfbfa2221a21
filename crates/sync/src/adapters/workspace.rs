//! GitHub Copilot Workspace adapter: `.workspace/rules.yaml`.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use serde_json::{json, Value};
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["context", "rules"]];

/// Adapter for GitHub Copilot Workspace.
pub struct WorkspaceAdapter {
    output: PathBuf,
}

impl WorkspaceAdapter {
    pub const ID: &'static str = "workspace";
    pub const DEFAULT_OUTPUT: &'static str = ".workspace/rules.yaml";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Yaml, RULES_FIELDS)
            .with_default(&["apiVersion"], json!("workspace/v1"))
            .with_default(&["metadata", "name"], json!("project-rules"))
            .with_default(&["workflows"], json!([]))
    }
}

impl Default for WorkspaceAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for WorkspaceAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "GitHub Copilot Workspace"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let rules = Value::String(join_markdown(ctx, PARAGRAPH_SEPARATOR));
        Self::schema().build(ctx, &self.output, vec![rules])
    }

    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        Self::schema().clean(ctx, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleFile;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn build_is_idempotent_and_clean_leaves_nothing() {
        let dir = tempdir().unwrap();
        let ctx = BuildContext::new(
            dir.path(),
            ".rules",
            vec![RuleFile::new("01-a.md", dir.path().join(".rules/01-a.md"), "# A")],
        );
        let adapter = WorkspaceAdapter::default();
        let path = dir.path().join(".workspace/rules.yaml");

        adapter.build(&ctx).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        adapter.build(&ctx).unwrap();
        assert_eq!(first, fs::read_to_string(&path).unwrap());
        assert!(first.contains("apiVersion: workspace/v1"));

        adapter.clean(&ctx).unwrap();
        assert!(!path.exists());
    }
}
