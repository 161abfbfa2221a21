use crate::config::AimapConfig;
use aimap_sync::adapters::traits::to_slash;
use aimap_sync::AgentRegistry;
use anyhow::Result;

/// Handle the `agents` command.
pub(crate) fn handle_agents_command(config: &AimapConfig) -> Result<()> {
    let registry = AgentRegistry::with_overrides(&config.outputs);
    for adapter in registry.list() {
        let marker = if config.agents.iter().any(|a| a == adapter.id()) {
            "*"
        } else {
            " "
        };
        let outputs: Vec<String> = adapter
            .output_paths()
            .iter()
            .map(|p| to_slash(p))
            .collect();
        println!(
            "{marker} {:<10} {:<26} {}",
            adapter.id(),
            adapter.display_name(),
            outputs.join(", ")
        );
    }
    println!();
    println!("* built by default ({})", config.agents.join(", "));
    Ok(())
}
