//! Tabnine adapter: project context in the `.tabnine` JSON config.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use serde_json::{json, Value};
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["projectContext"]];

/// Adapter for Tabnine.
pub struct TabnineAdapter {
    output: PathBuf,
}

impl TabnineAdapter {
    pub const ID: &'static str = "tabnine";
    pub const DEFAULT_OUTPUT: &'static str = ".tabnine";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Json, RULES_FIELDS)
            .with_default(&["disableTeamLearning"], json!(false))
            .with_default(
                &["teamLearningIgnore"],
                json!(["node_modules", ".git", "dist", "build"]),
            )
    }
}

impl Default for TabnineAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for TabnineAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Tabnine"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let context = Value::String(join_markdown(ctx, PARAGRAPH_SEPARATOR));
        Self::schema().build(ctx, &self.output, vec![context])
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
    fn fills_defaults_without_overriding_user_choices() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".tabnine"), r#"{"disableTeamLearning": true}"#).unwrap();
        let ctx = BuildContext::new(
            dir.path(),
            ".rules",
            vec![RuleFile::new("01-a.md", dir.path().join(".rules/01-a.md"), "# A")],
        );

        TabnineAdapter::default().build(&ctx).unwrap();
        let doc: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join(".tabnine")).unwrap())
                .unwrap();
        assert_eq!(doc["disableTeamLearning"], json!(true));
        assert_eq!(doc["projectContext"], json!("# A"));
        assert_eq!(doc["teamLearningIgnore"][1], json!(".git"));
    }
}
