//! Sourcegraph Cody adapter: rules merged into `.cody.json`.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use serde_json::{json, Value};
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["codebase", "context", "rules"]];

/// Adapter for Sourcegraph Cody.
pub struct CodyAdapter {
    output: PathBuf,
}

impl CodyAdapter {
    pub const ID: &'static str = "cody";
    pub const DEFAULT_OUTPUT: &'static str = ".cody.json";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Json, RULES_FIELDS).with_default(&["version"], json!("1.0"))
    }
}

impl Default for CodyAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for CodyAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Sourcegraph Cody"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let rules = Value::String(join_markdown(ctx, PARAGRAPH_SEPARATOR));
        let report = Self::schema().build(ctx, &self.output, vec![rules])?;
        ctx.progress(&format!("Updated {}", self.output.display()));
        Ok(report)
    }

    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        Self::schema().clean(ctx, &self.output)
    }
}
