//! Tabby ML adapter: assistant rules in `tabby.yaml`.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use serde_json::{json, Value};
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["assist", "rules"]];

/// Adapter for Tabby ML.
pub struct TabbyAdapter {
    output: PathBuf,
}

impl TabbyAdapter {
    pub const ID: &'static str = "tabby";
    pub const DEFAULT_OUTPUT: &'static str = "tabby.yaml";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Yaml, RULES_FIELDS)
            .with_default(&["server", "endpoint"], json!("http://localhost:8080"))
            .with_default(&["version"], json!("1.0"))
    }
}

impl Default for TabbyAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for TabbyAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Tabby ML"
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
