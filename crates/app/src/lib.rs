//! Command-line application for aimap.
//!
//! The main entry point is [`run`], which parses arguments, sets up logging
//! and dispatches to a command handler. Rule loading, adapters and the build
//! pipeline live in `aimap_sync`.

mod app;
mod cli;
mod commands;
pub mod config;

pub use app::run;
