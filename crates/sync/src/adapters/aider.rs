//! Aider adapter: rule files listed under `read` in `.aider.conf.yml`.

use super::structured::{ConfigSchema, DocFormat, Document, FieldPath};
use super::traits::{to_slash, AgentAdapter, BuildContext};
use crate::report::WriteReport;
use crate::Result;
use serde_json::Value;
use std::path::PathBuf;

const READ_FIELD: FieldPath = &["read"];

/// Adapter for Aider.
///
/// Aider loads every file named in `read` as read-only context, so the
/// rules are referenced by path. Entries outside the source directory
/// belong to the user and are kept in front of the rule references.
pub struct AiderAdapter {
    output: PathBuf,
}

impl AiderAdapter {
    pub const ID: &'static str = "aider";
    pub const DEFAULT_OUTPUT: &'static str = ".aider.conf.yml";

    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
        }
    }

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Yaml, &[READ_FIELD])
    }
}

impl Default for AiderAdapter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT)
    }
}

/// Source directory as it appears in references, with a trailing `/`.
fn source_prefix(ctx: &BuildContext) -> String {
    let relative = pathdiff::diff_paths(&ctx.source_dir, &ctx.root)
        .unwrap_or_else(|| ctx.source_dir.clone());
    format!("{}/", to_slash(&relative).trim_end_matches('/'))
}

/// `read` entries that do not point into the source directory.
fn user_entries(doc: &Document, prefix: &str) -> Vec<Value> {
    match doc.get(READ_FIELD) {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(|item| !item.as_str().is_some_and(|s| s.starts_with(prefix)))
            .collect(),
        Some(Value::String(single)) if !single.starts_with(prefix) => {
            vec![Value::String(single)]
        }
        _ => Vec::new(),
    }
}

impl AgentAdapter for AiderAdapter {
    fn id(&self) -> &str {
        Self::ID
    }

    fn display_name(&self) -> &str {
        "Aider"
    }

    fn output_paths(&self) -> Vec<PathBuf> {
        vec![self.output.clone()]
    }

    fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
        let schema = Self::schema();
        let mut report = WriteReport::default();
        let base = schema.load_base(ctx, &mut report, &self.output)?;

        let mut read = user_entries(&base, &source_prefix(ctx));
        read.extend(
            ctx.markdown_files()
                .map(|file| Value::String(ctx.reference(file))),
        );

        let mut doc = base;
        doc.set(READ_FIELD, Value::Array(read))?;
        let rendered = doc.render()?;
        ctx.write_file(&mut report, &self.output, &rendered)?;
        ctx.progress(&format!("Updated {}", self.output.display()));
        Ok(report)
    }

    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        let Some(text) = ctx.read_existing(&self.output)? else {
            return Ok(());
        };
        let Ok(mut doc) = DocFormat::Yaml.parse(&text) else {
            return Ok(());
        };

        let kept = user_entries(&doc, &source_prefix(ctx));
        if kept.is_empty() {
            doc.remove(READ_FIELD);
        } else {
            doc.set(READ_FIELD, Value::Array(kept))?;
        }

        if doc.is_empty() {
            ctx.remove_path(&self.output)?;
        } else {
            let rendered = doc.render()?;
            ctx.write_file(&mut WriteReport::default(), &self.output, &rendered)?;
        }
        Ok(())
    }
}
