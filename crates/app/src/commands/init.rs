use super::ensure_project_root;
use crate::config::CONFIG_FILE;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Starter `.aimap.yml` written by `aimap init`.
pub(crate) const CONFIG_TEMPLATE: &str = include_str!("../../templates/aimap.example.yml");

/// Handle the `init` command.
pub(crate) fn handle_init_command(root: &Path, force: bool) -> Result<()> {
    ensure_project_root(root, force)?;

    let target = root.join(CONFIG_FILE);
    if target.exists() {
        bail!("{CONFIG_FILE} already exists in current directory");
    }
    std::fs::write(&target, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to create configuration file {}", target.display()))?;

    println!("Created {CONFIG_FILE} successfully!");
    println!();
    println!("Next steps:");
    println!("1. Edit {CONFIG_FILE} to configure your agents and source directory");
    println!("2. Create your rules in the .rules directory (or configured source)");
    println!("3. Run \"aimap build\" to generate agent-specific configuration files");
    Ok(())
}
