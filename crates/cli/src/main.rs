//! Command-line interface for the `aimap` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `aimap-app` crate.

fn main() -> anyhow::Result<std::process::ExitCode> {
    aimap_app::run()
}
