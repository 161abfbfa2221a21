//! CLI command handlers for the aimap application.

mod agents;
mod build;
mod check;
mod clean;
mod hash;
mod init;

pub(crate) use agents::handle_agents_command;
pub(crate) use build::handle_build_command;
pub(crate) use check::handle_check_command;
pub(crate) use clean::handle_clean_command;
pub(crate) use hash::handle_hash_command;
pub(crate) use init::{handle_init_command, CONFIG_TEMPLATE};

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Walks up from `start` to the nearest directory containing `.git`.
pub(crate) fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Fails unless `cwd` is a git project root.
///
/// With `force`, any directory inside a git repository is accepted.
pub(crate) fn ensure_project_root(cwd: &Path, force: bool) -> Result<()> {
    let Some(root) = find_project_root(cwd) else {
        bail!("Not in a git repository. Initialize git first with \"git init\"");
    };
    if root != cwd && !force {
        bail!(
            "Not in project root. Run from {} or use --force flag",
            root.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimap_test_utils::RulesFixture;

    #[test]
    fn project_root_requires_git() {
        let fixture = RulesFixture::new().unwrap();
        let root = fixture.root();
        assert!(ensure_project_root(root, true).is_err());

        fixture.init_git().unwrap();
        assert!(ensure_project_root(root, false).is_ok());
        assert_eq!(find_project_root(&fixture.source_dir), Some(root.to_path_buf()));
    }

    #[test]
    fn subdirectory_needs_force() {
        let fixture = RulesFixture::new().unwrap();
        fixture.init_git().unwrap();

        let err = ensure_project_root(&fixture.source_dir, false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(ensure_project_root(&fixture.source_dir, true).is_ok());
    }
}
