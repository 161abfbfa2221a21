//! Merge-with-existing support for adapters that write structured configs.
//!
//! Each document keeps its own format's value tree (`serde_json::Map`,
//! `serde_yaml::Mapping` or `toml::Table`), so fields this crate knows
//! nothing about pass through a rebuild untouched. That includes TOML
//! datetimes and YAML keys that are not strings. Values written by adapters
//! are given as `serde_json::Value` and converted on the way in.

use super::traits::BuildContext;
use crate::report::{BuildWarning, WriteReport};
use crate::Result;
use anyhow::{anyhow, Context};
use serde_json::{Map, Value};
use serde_yaml::Mapping;
use std::path::Path;

/// On-disk encoding of a structured config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Json,
    Yaml,
    Toml,
}

impl DocFormat {
    /// Parses `text` into a document. Blank input is an empty document.
    pub fn parse(self, text: &str) -> Result<Document> {
        if text.trim().is_empty() {
            return Ok(Document::empty(self));
        }
        match self {
            Self::Json => match serde_json::from_str(text)? {
                Value::Object(map) => Ok(Document::Json(map)),
                Value::Null => Ok(Document::empty(self)),
                _ => Err(anyhow!("expected a mapping at the top level")),
            },
            Self::Yaml => match serde_yaml::from_str(text)? {
                serde_yaml::Value::Mapping(map) => Ok(Document::Yaml(map)),
                serde_yaml::Value::Null => Ok(Document::empty(self)),
                _ => Err(anyhow!("expected a mapping at the top level")),
            },
            Self::Toml => Ok(Document::Toml(toml::from_str(text)?)),
        }
    }
}

/// Field path inside a document, outermost key first.
pub type FieldPath = &'static [&'static str];

/// An open key-to-value document in its native format.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(Map<String, Value>),
    Yaml(Mapping),
    Toml(toml::Table),
}

impl Document {
    pub fn empty(format: DocFormat) -> Self {
        match format {
            DocFormat::Json => Self::Json(Map::new()),
            DocFormat::Yaml => Self::Yaml(Mapping::new()),
            DocFormat::Toml => Self::Toml(toml::Table::new()),
        }
    }

    pub fn format(&self) -> DocFormat {
        match self {
            Self::Json(_) => DocFormat::Json,
            Self::Yaml(_) => DocFormat::Yaml,
            Self::Toml(_) => DocFormat::Toml,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Json(tree) => tree.is_empty(),
            Self::Yaml(tree) => tree.is_empty(),
            Self::Toml(tree) => tree.is_empty(),
        }
    }

    /// Returns true if anything is stored at `path`.
    pub fn contains(&self, path: &[&str]) -> bool {
        match self {
            Self::Json(tree) => lookup(tree, path).is_some(),
            Self::Yaml(tree) => lookup(tree, path).is_some(),
            Self::Toml(tree) => lookup(tree, path).is_some(),
        }
    }

    /// Returns a JSON view of the value at `path`, if present.
    pub fn get(&self, path: &[&str]) -> Option<Value> {
        match self {
            Self::Json(tree) => get_json(tree, path),
            Self::Yaml(tree) => get_json(tree, path),
            Self::Toml(tree) => get_json(tree, path),
        }
    }

    /// Inserts `value` at `path`, replacing non-mapping intermediates.
    pub fn set(&mut self, path: &[&str], value: Value) -> Result<()> {
        match self {
            Self::Json(tree) => set_json(tree, path, value),
            Self::Yaml(tree) => set_json(tree, path, value),
            Self::Toml(tree) => set_json(tree, path, value),
        }
    }

    /// Inserts `value` at `path` only if nothing is there yet.
    pub fn set_default(&mut self, path: &[&str], value: Value) -> Result<()> {
        if self.contains(path) {
            return Ok(());
        }
        self.set(path, value)
    }

    /// Removes the value at `path`, pruning mappings left empty by the removal.
    pub fn remove(&mut self, path: &[&str]) -> bool {
        match self {
            Self::Json(tree) => remove_at(tree, path).is_some(),
            Self::Yaml(tree) => remove_at(tree, path).is_some(),
            Self::Toml(tree) => remove_at(tree, path).is_some(),
        }
    }

    /// Serializes the document in its own format.
    pub fn render(&self) -> Result<String> {
        Ok(match self {
            Self::Json(tree) => serde_json::to_string_pretty(tree)?,
            Self::Yaml(tree) => serde_yaml::to_string(tree)?,
            Self::Toml(tree) => toml::to_string(tree)?,
        })
    }
}

/// A format's mapping type, navigated by string keys.
trait Tree: Default {
    type Node;

    fn child(&self, key: &str) -> Option<&Self::Node>;
    fn child_mut(&mut self, key: &str) -> Option<&mut Self::Node>;
    fn put(&mut self, key: &str, node: Self::Node);
    fn take(&mut self, key: &str) -> Option<Self::Node>;
    fn has_no_entries(&self) -> bool;
    fn as_tree(node: &Self::Node) -> Option<&Self>;
    fn as_tree_mut(node: &mut Self::Node) -> Option<&mut Self>;
    fn wrap(tree: Self) -> Self::Node;
    fn encode(value: Value) -> Result<Self::Node>;
    fn decode(node: &Self::Node) -> Option<Value>;
}

impl Tree for Map<String, Value> {
    type Node = Value;

    fn child(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
    fn child_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.get_mut(key)
    }
    fn put(&mut self, key: &str, node: Value) {
        self.insert(key.to_string(), node);
    }
    fn take(&mut self, key: &str) -> Option<Value> {
        self.shift_remove(key)
    }
    fn has_no_entries(&self) -> bool {
        self.is_empty()
    }
    fn as_tree(node: &Value) -> Option<&Self> {
        node.as_object()
    }
    fn as_tree_mut(node: &mut Value) -> Option<&mut Self> {
        node.as_object_mut()
    }
    fn wrap(tree: Self) -> Value {
        Value::Object(tree)
    }
    fn encode(value: Value) -> Result<Value> {
        Ok(value)
    }
    fn decode(node: &Value) -> Option<Value> {
        Some(node.clone())
    }
}

impl Tree for Mapping {
    type Node = serde_yaml::Value;

    fn child(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.get(key)
    }
    fn child_mut(&mut self, key: &str) -> Option<&mut serde_yaml::Value> {
        self.get_mut(key)
    }
    fn put(&mut self, key: &str, node: serde_yaml::Value) {
        self.insert(serde_yaml::Value::String(key.to_string()), node);
    }
    fn take(&mut self, key: &str) -> Option<serde_yaml::Value> {
        self.shift_remove(key)
    }
    fn has_no_entries(&self) -> bool {
        self.is_empty()
    }
    fn as_tree(node: &serde_yaml::Value) -> Option<&Self> {
        node.as_mapping()
    }
    fn as_tree_mut(node: &mut serde_yaml::Value) -> Option<&mut Self> {
        node.as_mapping_mut()
    }
    fn wrap(tree: Self) -> serde_yaml::Value {
        serde_yaml::Value::Mapping(tree)
    }
    fn encode(value: Value) -> Result<serde_yaml::Value> {
        Ok(serde_yaml::to_value(value)?)
    }
    fn decode(node: &serde_yaml::Value) -> Option<Value> {
        serde_json::to_value(node).ok()
    }
}

impl Tree for toml::Table {
    type Node = toml::Value;

    fn child(&self, key: &str) -> Option<&toml::Value> {
        self.get(key)
    }
    fn child_mut(&mut self, key: &str) -> Option<&mut toml::Value> {
        self.get_mut(key)
    }
    fn put(&mut self, key: &str, node: toml::Value) {
        self.insert(key.to_string(), node);
    }
    fn take(&mut self, key: &str) -> Option<toml::Value> {
        self.remove(key)
    }
    fn has_no_entries(&self) -> bool {
        self.is_empty()
    }
    fn as_tree(node: &toml::Value) -> Option<&Self> {
        node.as_table()
    }
    fn as_tree_mut(node: &mut toml::Value) -> Option<&mut Self> {
        node.as_table_mut()
    }
    fn wrap(tree: Self) -> toml::Value {
        toml::Value::Table(tree)
    }
    fn encode(value: Value) -> Result<toml::Value> {
        Ok(toml::Value::try_from(value)?)
    }
    fn decode(node: &toml::Value) -> Option<Value> {
        serde_json::to_value(node).ok()
    }
}

fn lookup<'a, T: Tree>(tree: &'a T, path: &[&str]) -> Option<&'a T::Node> {
    let (last, parents) = path.split_last()?;
    let mut current = tree;
    for key in parents {
        current = T::as_tree(current.child(key)?)?;
    }
    current.child(last)
}

fn get_json<T: Tree>(tree: &T, path: &[&str]) -> Option<Value> {
    lookup(tree, path).and_then(T::decode)
}

fn set_json<T: Tree>(tree: &mut T, path: &[&str], value: Value) -> Result<()> {
    insert_at(tree, path, T::encode(value)?);
    Ok(())
}

fn insert_at<T: Tree>(tree: &mut T, path: &[&str], node: T::Node) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let mut current = tree;
    for key in parents {
        if current.child(key).and_then(T::as_tree).is_none() {
            current.put(key, T::wrap(T::default()));
        }
        let Some(next) = current.child_mut(key).and_then(T::as_tree_mut) else {
            return;
        };
        current = next;
    }
    current.put(last, node);
}

fn remove_at<T: Tree>(tree: &mut T, path: &[&str]) -> Option<T::Node> {
    match path {
        [] => None,
        [last] => tree.take(last),
        [first, rest @ ..] => {
            let child = T::as_tree_mut(tree.child_mut(first)?)?;
            let removed = remove_at(child, rest);
            if removed.is_some() && child.has_no_entries() {
                tree.take(first);
            }
            removed
        }
    }
}

/// Fixed schema of a structured-config adapter.
pub struct ConfigSchema {
    pub format: DocFormat,
    /// Fields that carry the rules; fully replaced on build, removed on clean
    pub rules_fields: &'static [FieldPath],
    /// Fields the target tool expects, filled only when absent
    pub scaffold: Vec<(FieldPath, Value)>,
}

impl ConfigSchema {
    pub fn new(format: DocFormat, rules_fields: &'static [FieldPath]) -> Self {
        Self {
            format,
            rules_fields,
            scaffold: Vec::new(),
        }
    }

    /// Adds a field filled with `value` when the document lacks it.
    pub fn with_default(mut self, field: FieldPath, value: Value) -> Self {
        self.scaffold.push((field, value));
        self
    }

    /// Loads the existing document at `path` as the merge base.
    ///
    /// A missing file is an empty base. An unparsable one is reported as a
    /// warning and also treated as empty.
    pub fn load_base(
        &self,
        ctx: &BuildContext,
        report: &mut WriteReport,
        path: &Path,
    ) -> Result<Document> {
        let Some(text) = ctx.read_existing(path)? else {
            return Ok(Document::empty(self.format));
        };
        match self.format.parse(&text) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                report.warn(BuildWarning::ExistingConfigUnparsable {
                    path: path.to_path_buf(),
                    error: format!("{err:#}"),
                });
                Ok(Document::empty(self.format))
            }
        }
    }

    /// Merges the rules into the document at `path` and writes it back.
    ///
    /// `values` pairs up with [`rules_fields`](Self::rules_fields).
    pub fn build(
        &self,
        ctx: &BuildContext,
        path: &Path,
        values: Vec<Value>,
    ) -> Result<WriteReport> {
        debug_assert_eq!(values.len(), self.rules_fields.len());
        let mut report = WriteReport::default();
        let mut doc = self.load_base(ctx, &mut report, path)?;

        for (field, value) in self.rules_fields.iter().zip(values) {
            doc.set(field, value)?;
        }
        for (field, value) in &self.scaffold {
            doc.set_default(field, value.clone())?;
        }

        let rendered = doc
            .render()
            .with_context(|| format!("failed to serialize {}", path.display()))?;
        ctx.write_file(&mut report, path, &rendered)?;
        Ok(report)
    }

    /// Removes the rules from the document at `path`.
    ///
    /// Scaffold fields still holding their default are removed as well. The
    /// file is deleted when nothing else remains, and left untouched when it
    /// cannot be parsed.
    pub fn clean(&self, ctx: &BuildContext, path: &Path) -> Result<()> {
        let Some(text) = ctx.read_existing(path)? else {
            return Ok(());
        };
        let Ok(mut doc) = self.format.parse(&text) else {
            tracing::debug!(path = %path.display(), "Leaving unparsable config in place");
            return Ok(());
        };

        for field in self.rules_fields {
            doc.remove(field);
        }
        for (field, default) in &self.scaffold {
            if doc.get(field).as_ref() == Some(default) {
                doc.remove(field);
            }
        }

        if doc.is_empty() {
            ctx.remove_path(path)?;
        } else {
            let rendered = doc.render()?;
            ctx.write_file(&mut WriteReport::default(), path, &rendered)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn json_doc(value: Value) -> Document {
        match value {
            Value::Object(map) => Document::Json(map),
            _ => panic!("expected object"),
        }
    }

    fn json_of(doc: &Document) -> Value {
        let Document::Json(map) = doc else {
            panic!("expected a JSON document");
        };
        Value::Object(map.clone())
    }

    #[test]
    fn set_and_remove_nested_fields() {
        let mut d = json_doc(json!({"keep": 1, "a": {"other": true}}));
        d.set(&["a", "b", "c"], json!("x")).unwrap();
        assert_eq!(d.get(&["a", "b", "c"]), Some(json!("x")));

        assert!(d.remove(&["a", "b", "c"]));
        assert_eq!(json_of(&d), json!({"keep": 1, "a": {"other": true}}));
        assert!(!d.remove(&["a", "missing"]));
    }

    #[test]
    fn set_replaces_scalar_parent() {
        let mut d = json_doc(json!({"codebase": "flat"}));
        d.set(&["codebase", "context", "rules"], json!("r")).unwrap();
        assert_eq!(json_of(&d), json!({"codebase": {"context": {"rules": "r"}}}));
    }

    #[test]
    fn set_default_keeps_existing() {
        let mut d = json_doc(json!({"version": "2.0"}));
        d.set_default(&["version"], json!("1.0")).unwrap();
        d.set_default(&["models"], json!([])).unwrap();
        assert_eq!(json_of(&d), json!({"version": "2.0", "models": []}));
    }

    #[test]
    fn formats_parse_and_render() {
        let yaml = DocFormat::Yaml.parse("model: gpt-4\nread:\n  - a.md\n").unwrap();
        assert_eq!(yaml.format(), DocFormat::Yaml);
        assert_eq!(yaml.get(&["model"]), Some(json!("gpt-4")));

        let toml = DocFormat::Toml
            .parse("[project]\nversion = \"1.0\"\n")
            .unwrap();
        assert_eq!(toml.get(&["project", "version"]), Some(json!("1.0")));
        let rendered = toml.render().unwrap();
        assert!(rendered.contains("[project]"));

        assert!(DocFormat::Json.parse("").unwrap().is_empty());
        assert!(DocFormat::Yaml.parse("# comment only\n").unwrap().is_empty());
        assert!(DocFormat::Json.parse("[1, 2]").is_err());
        assert!(DocFormat::Yaml.parse("- a\n- b\n").is_err());
        assert!(DocFormat::Yaml.parse("key: [unclosed").is_err());
    }

    #[test]
    fn toml_datetimes_survive_a_merge() {
        let mut doc = DocFormat::Toml
            .parse("created = 1979-05-27T07:32:00Z\n\n[project]\nname = \"demo\"\n")
            .unwrap();
        doc.set(&["project", "rules"], json!(["# A"])).unwrap();

        let rendered = doc.render().unwrap();
        assert!(rendered.contains("created = 1979-05-27T07:32:00Z"));
        assert!(!rendered.contains("toml_private_datetime"));

        let reparsed: toml::Table = toml::from_str(&rendered).unwrap();
        assert!(reparsed["created"].is_datetime());
        assert_eq!(reparsed["project"]["name"].as_str(), Some("demo"));
    }

    #[test]
    fn yaml_non_string_keys_survive_a_merge() {
        let mut doc = DocFormat::Yaml.parse("ports:\n  8080: web\n").unwrap();
        doc.set(&["context", "rules"], json!("r")).unwrap();

        let reparsed: serde_yaml::Value = serde_yaml::from_str(&doc.render().unwrap()).unwrap();
        let ports = reparsed["ports"].as_mapping().unwrap();
        assert_eq!(
            ports.get(serde_yaml::Value::from(8080)),
            Some(&serde_yaml::Value::from("web"))
        );
        assert!(ports.get("8080").is_none());
    }

    const RULES: &[FieldPath] = &[&["context", "rules"]];

    fn schema() -> ConfigSchema {
        ConfigSchema::new(DocFormat::Json, RULES).with_default(&["version"], json!("1.0"))
    }

    #[test]
    fn build_merges_and_replaces_rules() {
        let dir = tempdir().unwrap();
        let ctx = BuildContext::new(dir.path(), ".rules", Vec::new());
        fs::write(
            dir.path().join("cfg.json"),
            r#"{"user": {"theme": "dark"}, "context": {"rules": "old", "extra": 1}}"#,
        )
        .unwrap();

        let report = schema()
            .build(&ctx, Path::new("cfg.json"), vec![json!("new")])
            .unwrap();
        assert!(report.warnings.is_empty());

        let written: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("cfg.json")).unwrap())
                .unwrap();
        assert_eq!(
            written,
            json!({
                "user": {"theme": "dark"},
                "context": {"rules": "new", "extra": 1},
                "version": "1.0"
            })
        );
    }

    #[test]
    fn build_over_malformed_file_warns_and_starts_empty() {
        let dir = tempdir().unwrap();
        let ctx = BuildContext::new(dir.path(), ".rules", Vec::new());
        fs::write(dir.path().join("cfg.json"), "{ not json").unwrap();

        let report = schema()
            .build(&ctx, Path::new("cfg.json"), vec![json!("r")])
            .unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            report.warnings[0],
            BuildWarning::ExistingConfigUnparsable { .. }
        ));

        let written: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("cfg.json")).unwrap())
                .unwrap();
        assert_eq!(written, json!({"context": {"rules": "r"}, "version": "1.0"}));
    }

    #[test]
    fn clean_strips_rules_and_defaults() {
        let dir = tempdir().unwrap();
        let ctx = BuildContext::new(dir.path(), ".rules", Vec::new());
        let path = Path::new("cfg.json");

        schema().build(&ctx, path, vec![json!("r")]).unwrap();
        schema().clean(&ctx, path).unwrap();
        assert!(!dir.path().join("cfg.json").exists());

        fs::write(dir.path().join("cfg.json"), r#"{"user": 1, "version": "3.0"}"#).unwrap();
        schema().build(&ctx, path, vec![json!("r")]).unwrap();
        schema().clean(&ctx, path).unwrap();
        let left: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("cfg.json")).unwrap())
                .unwrap();
        assert_eq!(left, json!({"user": 1, "version": "3.0"}));
    }
}
