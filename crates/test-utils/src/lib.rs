//! Shared test utilities for aimap crates.
//!
//! Every fixture lives in its own temporary project root, so tests never
//! touch the process working directory and can run in parallel.

use std::fs;
use std::path::{Path, PathBuf};

/// Temporary project with a rule source directory.
///
/// The tempdir is removed when the fixture is dropped.
pub struct RulesFixture {
    pub tempdir: tempfile::TempDir,
    /// Rule source directory (`<root>/.rules`)
    pub source_dir: PathBuf,
}

impl RulesFixture {
    /// Create a project root with an empty `.rules/` directory.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let source_dir = tempdir.path().join(".rules");
        fs::create_dir_all(&source_dir)?;
        Ok(Self {
            tempdir,
            source_dir,
        })
    }

    /// Create a project holding `rules` as `(name, content)` pairs.
    pub fn with_rules(rules: &[(&str, &str)]) -> std::io::Result<Self> {
        let fixture = Self::new()?;
        for (name, content) in rules {
            fixture.write_rule(name, content)?;
        }
        Ok(fixture)
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        self.tempdir.path()
    }

    /// Write (or overwrite) a file in the source directory.
    pub fn write_rule(&self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.source_dir.join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a file relative to the project root, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Read a file relative to the project root.
    pub fn read(&self, relative: &str) -> std::io::Result<String> {
        fs::read_to_string(self.root().join(relative))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.root().join(relative).exists()
    }

    /// Mark the root as a git project root.
    pub fn init_git(&self) -> std::io::Result<()> {
        fs::create_dir_all(self.root().join(".git"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_creates_source_and_rules() {
        let fixture = RulesFixture::with_rules(&[("01-a.md", "# A")]).unwrap();
        assert!(fixture.source_dir.is_dir());
        assert_eq!(fixture.read(".rules/01-a.md").unwrap(), "# A");
        assert!(!fixture.exists(".git"));

        fixture.init_git().unwrap();
        assert!(fixture.exists(".git"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let fixture = RulesFixture::new().unwrap();
        fixture.write("nested/dir/file.txt", "x").unwrap();
        assert_eq!(fixture.read("nested/dir/file.txt").unwrap(), "x");
    }
}
