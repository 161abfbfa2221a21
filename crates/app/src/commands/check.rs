use super::ensure_project_root;
use crate::config::AimapConfig;
use aimap_sync::{compare, fingerprint::sidecar_path};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Handle the `check` command. Never writes.
///
/// Exits with 1 in quiet mode when a build is needed.
pub(crate) fn handle_check_command(
    root: &Path,
    config: &AimapConfig,
    source: Option<PathBuf>,
    quiet: bool,
    force: bool,
) -> Result<ExitCode> {
    ensure_project_root(root, force)?;
    let source_dir = root.join(config.source_or(source));
    if !source_dir.is_dir() {
        bail!("Source directory \"{}\" does not exist.", source_dir.display());
    }

    let comparison = compare(&source_dir).context("Failed to check build status")?;
    if !quiet {
        match &comparison.stored {
            None => {
                println!(
                    "No stored build hash found at {}",
                    sidecar_path(&source_dir).display()
                );
                println!("Current hash: {}", comparison.computed);
                println!("Build is needed.");
            }
            Some(stored) if comparison.needs_build => {
                println!("Current hash: {}", comparison.computed);
                println!("Stored hash:  {}", stored);
                println!("Build is needed (hash mismatch).");
            }
            Some(_) => {
                println!(
                    "Up-to-date. Current hash matches stored hash: {}",
                    comparison.computed
                );
            }
        }
    }

    if quiet && comparison.needs_build {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
