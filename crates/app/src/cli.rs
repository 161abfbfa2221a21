use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the `aimap` application.
#[derive(Debug, Parser)]
#[command(
    name = "aimap",
    version,
    about = "Build AI coding assistant rules from a single .rules directory"
)]
pub struct Cli {
    /// Path to the aimap config file.
    #[arg(
        short,
        long,
        global = true,
        env = "AIMAP_CONFIG",
        default_value = crate::config::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Verbose output (per-file progress, debug logging).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `aimap` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds agent rule files from the source directory.
    Build {
        /// Comma-separated list of agents (overrides config).
        #[arg(short, long, env = "AIMAP_AGENTS", value_delimiter = ',')]
        agents: Vec<String>,
        /// Source directory for rules (overrides config).
        #[arg(short = 'd', long, env = "AIMAP_SOURCE")]
        source: Option<PathBuf>,
        /// Dry run: report what would be built without writing anything.
        #[arg(long, default_value_t = false)]
        dry: bool,
    },
    /// Checks whether the rules changed since the last build.
    Check {
        /// Exit code only: 0 up to date, 1 build needed.
        #[arg(short, long, default_value_t = false)]
        quiet: bool,
        /// Source directory for rules (overrides config).
        #[arg(short = 'd', long, env = "AIMAP_SOURCE")]
        source: Option<PathBuf>,
        /// Run outside the project root (skip the git root check).
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Prints the current rules fingerprint.
    Hash {
        /// Print the first 16 characters only.
        #[arg(short, long, default_value_t = false)]
        short: bool,
        /// Source directory for rules (overrides config).
        #[arg(short = 'd', long, env = "AIMAP_SOURCE")]
        source: Option<PathBuf>,
        /// Run outside the project root (skip the git root check).
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Removes generated agent files.
    Clean {
        /// Also remove the stored build hash.
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Creates `.aimap.yml` in the current project.
    Init {
        /// Initialize even when not at the project root.
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Lists every supported agent and its outputs.
    Agents,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_parses_agent_list() {
        let cli = Cli::try_parse_from(["aimap", "build", "--agents", "claude,cursor", "--dry"])
            .unwrap();
        match cli.command {
            Commands::Build {
                agents,
                source,
                dry,
            } => {
                assert_eq!(agents, vec!["claude", "cursor"]);
                assert!(source.is_none());
                assert!(dry);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from(".aimap.yml"));
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["aimap", "clean", "--all", "-v", "-c", "custom.yml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("custom.yml"));
        assert!(matches!(cli.command, Commands::Clean { all: true }));
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
