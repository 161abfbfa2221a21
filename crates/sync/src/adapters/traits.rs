//! Trait definition for agent adapters and the context they build from.

use crate::report::WriteReport;
use crate::rules::RuleFile;
use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Everything an adapter needs for one build or clean.
///
/// All filesystem mutations go through [`write_file`](Self::write_file) and
/// [`remove_path`](Self::remove_path), which turn into no-ops in dry-run
/// mode. Reads are always performed, so dry runs compute the same content
/// and warnings as real ones.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root every output path is resolved against
    pub root: PathBuf,
    /// Source directory, already resolved against `root`
    pub source_dir: PathBuf,
    /// Loaded rule files in name order
    pub files: Vec<RuleFile>,
    pub dry_run: bool,
    /// Gates progress messages only, never behavior
    pub verbose: bool,
}

impl BuildContext {
    /// Creates a context for a non-dry, quiet run.
    pub fn new(
        root: impl Into<PathBuf>,
        source_dir: impl AsRef<Path>,
        files: Vec<RuleFile>,
    ) -> Self {
        let root = root.into();
        let source_dir = root.join(source_dir);
        Self {
            root,
            source_dir,
            files,
            dry_run: false,
            verbose: false,
        }
    }

    /// Markdown rule files, the only ones adapters render.
    pub fn markdown_files(&self) -> impl Iterator<Item = &RuleFile> {
        self.files.iter().filter(|f| f.is_markdown())
    }

    /// Resolves a project-relative path.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Path of a rule file relative to the project root, with `/` separators.
    pub fn reference(&self, file: &RuleFile) -> String {
        let relative =
            pathdiff::diff_paths(&file.path, &self.root).unwrap_or_else(|| file.path.clone());
        to_slash(&relative)
    }

    /// Emits a progress message when verbose.
    pub fn progress(&self, message: &str) {
        if self.verbose {
            tracing::info!("{}", message);
        } else {
            tracing::debug!("{}", message);
        }
    }

    /// Reads a project-relative file, returning `None` if it does not exist.
    pub fn read_existing(&self, path: &Path) -> Result<Option<String>> {
        let full = self.resolve(path);
        match fs::read_to_string(&full) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("failed to read {}", full.display())),
        }
    }

    /// Writes `contents` to a project-relative path and records it in `report`.
    ///
    /// Parent directories are created as needed. The file is written to a
    /// sibling temp file first and renamed into place.
    pub fn write_file(&self, report: &mut WriteReport, path: &Path, contents: &str) -> Result<()> {
        report.written.push(path.to_path_buf());
        if self.dry_run {
            return Ok(());
        }

        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let file_name = full
            .file_name()
            .with_context(|| format!("output path has no file name: {}", full.display()))?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".aimap-tmp");
        let temp_path = full.with_file_name(temp_name);

        fs::write(&temp_path, contents)
            .with_context(|| format!("failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, &full)
            .with_context(|| format!("failed to rename temp file to: {}", full.display()))?;
        Ok(())
    }

    /// Removes a project-relative file or directory tree.
    ///
    /// Returns whether something was there. A missing path is not an error.
    pub fn remove_path(&self, path: &Path) -> Result<bool> {
        let full = self.resolve(path);
        let metadata = match fs::symlink_metadata(&full) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to inspect {}", full.display()))
            }
        };
        if self.dry_run {
            return Ok(true);
        }

        if metadata.is_dir() {
            fs::remove_dir_all(&full)
        } else {
            fs::remove_file(&full)
        }
        .with_context(|| format!("failed to remove {}", full.display()))?;
        Ok(true)
    }
}

/// Renders a path with `/` separators regardless of platform.
pub fn to_slash(path: &Path) -> String {
    let text = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '\\' {
        text.replace('\\', "/")
    } else {
        text.into_owned()
    }
}

/// Marks a directory output: the path with a trailing separator.
pub fn dir_pattern(dir: &Path) -> PathBuf {
    dir.join("")
}

/// Output adapter for one AI coding assistant.
///
/// Adapters must only touch the paths they declare in
/// [`output_paths`](Self::output_paths), and `build` must be idempotent.
#[cfg_attr(test, automock)]
pub trait AgentAdapter: Send + Sync {
    /// Stable identifier (e.g., "claude", "cursor")
    fn id(&self) -> &str;

    /// Human-readable name
    fn display_name(&self) -> &str;

    /// Project-relative outputs owned by this adapter. Directories end with a separator.
    fn output_paths(&self) -> Vec<PathBuf>;

    /// Renders the rule files into this adapter's outputs.
    fn build(&self, ctx: &BuildContext) -> Result<WriteReport>;

    /// Removes this adapter's outputs.
    ///
    /// The default removes every declared output path.
    fn clean(&self, ctx: &BuildContext) -> Result<()> {
        for path in self.output_paths() {
            if ctx.remove_path(&path)? {
                ctx.progress(&format!("Removed {}", path.display()));
            }
        }
        Ok(())
    }
}
