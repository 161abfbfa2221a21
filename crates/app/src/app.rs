use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_agents_command, handle_build_command, handle_check_command, handle_clean_command,
    handle_hash_command, handle_init_command,
};
use crate::config::AimapConfig;
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Sets up stderr logging. `RUST_LOG` wins over the verbose flag.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The main entry point for the `aimap` application.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = std::env::current_dir().context("Failed to determine current directory")?;
    let config = AimapConfig::load(&root.join(&cli.config));

    match cli.command {
        Commands::Build {
            agents,
            source,
            dry,
        } => handle_build_command(&root, &config, agents, source, dry, cli.verbose)?,
        Commands::Check {
            quiet,
            source,
            force,
        } => return handle_check_command(&root, &config, source, quiet, force),
        Commands::Hash {
            short,
            source,
            force,
        } => handle_hash_command(&root, &config, source, short, force)?,
        Commands::Clean { all } => handle_clean_command(&root, &config, all, cli.verbose)?,
        Commands::Init { force } => handle_init_command(&root, force)?,
        Commands::Agents => handle_agents_command(&config)?,
    }
    Ok(ExitCode::SUCCESS)
}
