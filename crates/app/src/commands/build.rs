use crate::config::AimapConfig;
use aimap_sync::{AgentRegistry, BuildOrchestrator, BuildParams};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Handle the `build` command.
pub(crate) fn handle_build_command(
    root: &Path,
    config: &AimapConfig,
    agents: Vec<String>,
    source: Option<PathBuf>,
    dry_run: bool,
    verbose: bool,
) -> Result<()> {
    let registry = AgentRegistry::with_overrides(&config.outputs);
    let params = BuildParams {
        source_dir: config.source_or(source),
        root: root.to_path_buf(),
        agents: Some(config.agents_or(agents)),
        dry_run,
        verbose,
    };

    if dry_run {
        println!("Dry run: no files will be written.");
    }
    let report = BuildOrchestrator::new(&registry, params).build()?;
    print!("{}", report.summary);
    Ok(())
}
