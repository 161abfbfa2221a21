//! Rule-file discovery and loading.

use crate::error::BuildError;
use crate::Result;
use anyhow::Context;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// File name suffixes that mark a source document as a rule file.
pub const RULE_SUFFIXES: &[&str] = &[".md", ".yaml", ".yml"];

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# +(.+?)\r?$").expect("Invalid regex pattern"));

/// One source document, read fresh for every build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFile {
    /// File name relative to the source directory. Sorting and hashing follow this.
    pub name: String,
    /// Location of the file, used by adapters that reference rather than copy.
    pub path: PathBuf,
    /// Full UTF-8 content.
    pub content: String,
    /// Text of the first level-1 heading (markdown files only).
    pub title: Option<String>,
}

impl RuleFile {
    /// Builds a rule file from its parts, extracting the title for markdown.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        content: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let content = content.into();
        let title = if name.ends_with(".md") {
            extract_title(&content)
        } else {
            None
        };
        Self {
            name,
            path: path.into(),
            content,
            title,
        }
    }

    /// Returns true for markdown rules, the only kind adapters render.
    pub fn is_markdown(&self) -> bool {
        self.name.ends_with(".md")
    }

    /// File name without its `.md` suffix.
    pub fn stem(&self) -> &str {
        self.name.strip_suffix(".md").unwrap_or(&self.name)
    }
}

/// Returns true if `name` carries one of the [`RULE_SUFFIXES`].
pub fn is_rule_file_name(name: &str) -> bool {
    RULE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Extracts the text of the first `# Heading` line, if any.
pub fn extract_title(content: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end().to_string())
        .filter(|title| !title.is_empty())
}

fn is_rule_candidate(path: Option<&Path>) -> bool {
    path.and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(is_rule_file_name)
}

/// Loads every rule file directly inside `source_dir`, sorted by name.
///
/// The scan is not recursive. An empty result is not an error here; the
/// orchestrator decides what an empty rule set means.
pub fn load_rule_files(source_dir: &Path) -> Result<Vec<RuleFile>> {
    if !source_dir.is_dir() {
        return Err(BuildError::SourceNotFound {
            path: source_dir.to_path_buf(),
        }
        .into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 || is_rule_candidate(err.path()) => {
                return Err(anyhow::Error::new(err)
                    .context(format!("failed to scan rules in {}", source_dir.display())));
            }
            Err(err) => {
                tracing::debug!(error = %err, "Skipping unreadable non-rule entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        if !is_rule_file_name(name) {
            continue;
        }

        let content = fs::read_to_string(entry.path())
            .with_context(|| format!("failed to read rule file {}", entry.path().display()))?;
        files.push(RuleFile::new(name, entry.path(), content));
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
