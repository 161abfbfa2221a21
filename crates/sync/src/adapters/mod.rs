//! Agent adapters rendering rule files into each assistant's native layout.

mod agents;
mod aider;
mod amazonq;
mod claude;
mod cline;
mod codex;
mod cody;
mod continue_dev;
mod copilot;
mod cursor;
mod gemini;
mod jetbrains;
mod pieces;
mod replit;
mod roocode;
pub mod structured;
mod tabby;
mod tabnine;
pub mod traits;
pub mod utils;
mod windsurf;
mod workspace;

pub use agents::AgentsAdapter;
pub use aider::AiderAdapter;
pub use amazonq::AmazonQAdapter;
pub use claude::ClaudeAdapter;
pub use cline::ClineAdapter;
pub use codex::CodexAdapter;
pub use cody::CodyAdapter;
pub use continue_dev::ContinueAdapter;
pub use copilot::CopilotAdapter;
pub use cursor::CursorAdapter;
pub use gemini::GeminiAdapter;
pub use jetbrains::JetBrainsAdapter;
pub use pieces::PiecesAdapter;
pub use replit::ReplitAdapter;
pub use roocode::RooCodeAdapter;
pub use tabby::TabbyAdapter;
pub use tabnine::TabnineAdapter;
pub use traits::{AgentAdapter, BuildContext};
pub use windsurf::WindsurfAdapter;
pub use workspace::WorkspaceAdapter;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Per-agent replacement of the primary output path, keyed by agent id.
pub type OutputOverrides = BTreeMap<String, PathBuf>;

/// Every built-in adapter, with `overrides` applied to their primary outputs.
pub fn builtin_adapters(overrides: &OutputOverrides) -> Vec<Box<dyn AgentAdapter>> {
    let out = |id: &str, default: &str| utils::output_or(overrides, id, default);

    vec![
        Box::new(AgentsAdapter::new(out(AgentsAdapter::ID, AgentsAdapter::DEFAULT_OUTPUT))),
        Box::new(AiderAdapter::new(out(AiderAdapter::ID, AiderAdapter::DEFAULT_OUTPUT))),
        Box::new(AmazonQAdapter::new(out(AmazonQAdapter::ID, AmazonQAdapter::DEFAULT_OUTPUT))),
        Box::new(ClaudeAdapter::new(out(ClaudeAdapter::ID, ClaudeAdapter::DEFAULT_OUTPUT))),
        Box::new(ClineAdapter::new(out(ClineAdapter::ID, ClineAdapter::DEFAULT_OUTPUT))),
        Box::new(CodexAdapter::new(out(CodexAdapter::ID, CodexAdapter::DEFAULT_OUTPUT))),
        Box::new(CodyAdapter::new(out(CodyAdapter::ID, CodyAdapter::DEFAULT_OUTPUT))),
        Box::new(ContinueAdapter::new(out(ContinueAdapter::ID, ContinueAdapter::DEFAULT_OUTPUT))),
        Box::new(CopilotAdapter::new(out(CopilotAdapter::ID, CopilotAdapter::DEFAULT_OUTPUT))),
        Box::new(CursorAdapter::new(out(CursorAdapter::ID, CursorAdapter::DEFAULT_OUTPUT))),
        Box::new(GeminiAdapter::new(out(GeminiAdapter::ID, GeminiAdapter::DEFAULT_OUTPUT))),
        Box::new(JetBrainsAdapter::new(out(
            JetBrainsAdapter::ID,
            JetBrainsAdapter::DEFAULT_OUTPUT,
        ))),
        Box::new(PiecesAdapter::new(out(PiecesAdapter::ID, PiecesAdapter::DEFAULT_OUTPUT))),
        Box::new(ReplitAdapter::new(out(ReplitAdapter::ID, ReplitAdapter::DEFAULT_OUTPUT))),
        Box::new(RooCodeAdapter::new(out(RooCodeAdapter::ID, RooCodeAdapter::DEFAULT_OUTPUT))),
        Box::new(TabbyAdapter::new(out(TabbyAdapter::ID, TabbyAdapter::DEFAULT_OUTPUT))),
        Box::new(TabnineAdapter::new(out(TabnineAdapter::ID, TabnineAdapter::DEFAULT_OUTPUT))),
        Box::new(WindsurfAdapter::new(out(WindsurfAdapter::ID, WindsurfAdapter::DEFAULT_OUTPUT))),
        Box::new(WorkspaceAdapter::new(out(
            WorkspaceAdapter::ID,
            WorkspaceAdapter::DEFAULT_OUTPUT,
        ))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn builtin_ids_are_unique() {
        let adapters = builtin_adapters(&OutputOverrides::new());
        let ids: BTreeSet<&str> = adapters.iter().map(|a| a.id()).collect();
        assert_eq!(ids.len(), adapters.len());
        assert_eq!(adapters.len(), 19);
    }

    #[test]
    fn declared_outputs_do_not_overlap() {
        let adapters = builtin_adapters(&OutputOverrides::new());
        let mut seen = BTreeSet::new();
        for adapter in &adapters {
            for path in adapter.output_paths() {
                assert!(seen.insert(path.clone()), "{} declared twice", path.display());
            }
        }
    }

    #[test]
    fn overrides_replace_primary_output() {
        let mut overrides = OutputOverrides::new();
        overrides.insert("codex".into(), PathBuf::from("docs/CODEX.md"));
        let adapters = builtin_adapters(&overrides);
        let codex = adapters.iter().find(|a| a.id() == "codex").unwrap();
        assert_eq!(codex.output_paths(), vec![PathBuf::from("docs/CODEX.md")]);
    }
}
