//! Continue.dev adapter: rules in `.continue/config.yaml`.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use super::utils::{join_markdown, PARAGRAPH_SEPARATOR};
use crate::report::WriteReport;
use crate::Result;
use serde_json::json;
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["rules"]];

/// Adapter for Continue.dev.
///
/// Continue refuses configs missing its top-level sections, so empty ones
/// are scaffolded next to the rules.
pub struct ContinueAdapter {
    output: PathBuf,
}

impl ContinueAdapter {
    pub const ID: &'static str = "continue";
    pub const DEFAULT_OUTPUT: &'static str = ".continue/config.yaml";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Yaml, RULES_FIELDS)
            .with_default(&["context", "providers"], json!([]))
            .with_default(&["models"], json!([]))
            .with_default(&["prompts"], json!([]))
            .with_default(
                &["tabAutocompleteModel"],
                json!({
                    "apiBase": "",
                    "model": "",
                    "provider": "",
                    "title": "Tab Autocomplete"
                }),
            )
    }
}

impl Default for ContinueAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for ContinueAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Continue.dev"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let rules = json!([join_markdown(ctx, PARAGRAPH_SEPARATOR)]);
        let report = Self::schema().build(ctx, &self.output, vec![rules])?;
        ctx.progress(&format!("Updated {}", self.output.display()));
        Ok(report)
    }

    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        Self::schema().clean(ctx, &self.output)
    }
}
