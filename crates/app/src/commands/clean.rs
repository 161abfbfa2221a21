use crate::config::AimapConfig;
use aimap_sync::fingerprint::sidecar_path;
use aimap_sync::{AgentRegistry, BuildContext};
use anyhow::{Context, Result};
use std::path::Path;

/// Handle the `clean` command.
///
/// Runs the clean step of every configured agent. A failing agent is
/// reported and the rest are still cleaned.
pub(crate) fn handle_clean_command(
    root: &Path,
    config: &AimapConfig,
    all: bool,
    verbose: bool,
) -> Result<()> {
    println!("Cleaning generated rule files...");
    let registry = AgentRegistry::with_overrides(&config.outputs);
    let mut ctx = BuildContext::new(root, &config.source, Vec::new());
    ctx.verbose = verbose;

    let mut cleaned = 0;
    for id in &config.agents {
        let Some(adapter) = registry.get(id) else {
            tracing::warn!(agent = %id, "Unknown agent, skipping");
            continue;
        };
        match adapter.clean(&ctx) {
            Ok(()) => {
                cleaned += 1;
                ctx.progress(&format!("Cleaned {}", adapter.display_name()));
            }
            Err(err) => {
                tracing::warn!(
                    agent = %id,
                    error = %err,
                    "Failed to clean {}",
                    adapter.display_name()
                );
            }
        }
    }

    if all {
        let sidecar = sidecar_path(&ctx.source_dir);
        if sidecar.exists() {
            std::fs::remove_file(&sidecar)
                .with_context(|| format!("Failed to remove {}", sidecar.display()))?;
            ctx.progress(&format!("Removed {}", sidecar.display()));
        }
    }

    println!("Cleaned outputs of {cleaned} agents");
    Ok(())
}
