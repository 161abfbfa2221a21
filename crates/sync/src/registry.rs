//! Registry of agent adapters keyed by id.

use crate::adapters::{builtin_adapters, AgentAdapter, OutputOverrides};
use std::collections::BTreeMap;

/// Mapping from agent id to adapter.
///
/// Populated once before a build and read-only afterwards; the orchestrator
/// borrows it immutably. Iteration follows id order.
#[derive(Default)]
pub struct AgentRegistry {
    adapters: BTreeMap<String, Box<dyn AgentAdapter>>,
}

impl AgentRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in adapter at its default output.
    pub fn with_builtins() -> Self {
        Self::with_overrides(&OutputOverrides::new())
    }

    /// Registry holding every built-in adapter, with output overrides applied.
    pub fn with_overrides(overrides: &OutputOverrides) -> Self {
        let mut registry = Self::new();
        for adapter in builtin_adapters(overrides) {
            registry.register(adapter);
        }
        registry
    }

    /// Register an adapter. An existing adapter with the same id is replaced.
    pub fn register(&mut self, adapter: Box<dyn AgentAdapter>) {
        let id = adapter.id().to_string();
        if self.adapters.insert(id.clone(), adapter).is_some() {
            tracing::debug!(agent = %id, "Replaced registered adapter");
        }
    }

    pub fn get(&self, id: &str) -> Option<&dyn AgentAdapter> {
        self.adapters.get(id).map(|a| a.as_ref())
    }

    /// All adapters in id order.
    pub fn list(&self) -> Vec<&dyn AgentAdapter> {
        self.adapters.values().map(|a| a.as_ref()).collect()
    }

    /// All ids in order.
    pub fn list_ids(&self) -> Vec<String> {
        self.adapters.keys().cloned().collect()
    }

    pub fn has(&self, id: &str) -> bool {
        self.adapters.contains_key(id)
    }

    /// Remove every adapter.
    pub fn clear(&mut self) {
        self.adapters.clear();
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl std::fmt::Debug for AgentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentRegistry")
            .field("ids", &self.list_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::traits::MockAgentAdapter;
    use crate::adapters::{ClaudeAdapter, CodexAdapter};
    use std::path::PathBuf;

    fn mock(id: &'static str, name: &'static str) -> Box<dyn AgentAdapter> {
        let mut adapter = MockAgentAdapter::new();
        adapter.expect_id().return_const(id.to_string());
        adapter.expect_display_name().return_const(name.to_string());
        Box::new(adapter)
    }

    #[test]
    fn register_get_and_has() {
        let mut registry = AgentRegistry::new();
        assert!(registry.is_empty());

        registry.register(Box::new(ClaudeAdapter::default()));
        assert!(registry.has("claude"));
        assert!(!registry.has("codex"));
        assert_eq!(registry.get("claude").unwrap().display_name(), "Claude Code");
        assert!(registry.get("codex").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = AgentRegistry::new();
        registry.register(mock("custom", "First"));
        registry.register(mock("custom", "Second"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("custom").unwrap().display_name(), "Second");
    }

    #[test]
    fn list_ids_are_sorted_and_clear_empties() {
        let mut registry = AgentRegistry::new();
        registry.register(Box::new(CodexAdapter::default()));
        registry.register(Box::new(ClaudeAdapter::default()));
        assert_eq!(registry.list_ids(), vec!["claude", "codex"]);
        assert_eq!(registry.list().len(), 2);

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.list_ids().is_empty());
    }

    #[test]
    fn builtins_cover_every_known_agent() {
        let registry = AgentRegistry::with_builtins();
        for id in [
            "agents", "aider", "amazonq", "claude", "cline", "codex", "cody", "continue",
            "copilot", "cursor", "gemini", "jetbrains", "pieces", "replit", "roocode", "tabby",
            "tabnine", "windsurf", "workspace",
        ] {
            assert!(registry.has(id), "missing adapter {id}");
        }
    }

    #[test]
    fn overrides_reach_registered_adapters() {
        let mut overrides = OutputOverrides::new();
        overrides.insert("windsurf".into(), PathBuf::from("config/windsurf.md"));
        let registry = AgentRegistry::with_overrides(&overrides);
        assert_eq!(
            registry.get("windsurf").unwrap().output_paths(),
            vec![PathBuf::from("config/windsurf.md")]
        );
    }
}
