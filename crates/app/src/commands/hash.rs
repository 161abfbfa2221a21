use super::ensure_project_root;
use crate::config::AimapConfig;
use aimap_sync::{compute_fingerprint, load_rule_files};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Length of the `--short` fingerprint.
const SHORT_HASH_LEN: usize = 16;

/// Handle the `hash` command.
pub(crate) fn handle_hash_command(
    root: &Path,
    config: &AimapConfig,
    source: Option<PathBuf>,
    short: bool,
    force: bool,
) -> Result<()> {
    ensure_project_root(root, force)?;
    let source_dir = root.join(config.source_or(source));
    if !source_dir.is_dir() {
        bail!("Source directory \"{}\" does not exist.", source_dir.display());
    }

    let files = load_rule_files(&source_dir).context("Failed to compute rules hash")?;
    let hash = compute_fingerprint(&files);
    if short {
        println!("{}", hash.get(..SHORT_HASH_LEN).unwrap_or(&hash));
    } else {
        println!("{hash}");
    }
    Ok(())
}
