//! Pieces for Developers adapter: per-rule entries in `pieces.toml`.

use super::structured::{ConfigSchema, DocFormat, FieldPath};
use super::traits::{AgentAdapter, BuildContext};
use crate::report::WriteReport;
use crate::Result;
use serde_json::{json, Value};
use std::path::PathBuf;

const RULES_FIELDS: &[FieldPath] = &[&["project", "rules"]];

/// Adapter for Pieces for Developers.
pub struct PiecesAdapter {
    output: PathBuf,
}

impl PiecesAdapter {
    pub const ID: &'static str = "pieces";
    pub const DEFAULT_OUTPUT: &'static str = "pieces.toml";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Toml, RULES_FIELDS)
            .with_default(&["project", "version"], json!("1.0"))
            .with_default(&["context", "profiles"], json!(["default"]))
    }
}

impl Default for PiecesAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

impl AgentAdapter for PiecesAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Pieces for Developers"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let rules: Vec<Value> = ctx
            .markdown_files()
            .map(|file| Value::String(file.content.clone()))
            .collect();
        Self::schema().build(ctx, &self.output, vec![Value::Array(rules)])
    }

    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        Self::schema().clean(ctx, &self.output)
    }
}
