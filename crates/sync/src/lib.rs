//! Rule-file fan-out for aimap.
//!
//! Loads a directory of canonical rule documents (`*.md`, `*.yaml`, `*.yml`)
//! and renders them into the configuration layouts expected by individual AI
//! coding assistants through a registry of pluggable adapters. A SHA-256
//! fingerprint over the rule contents is persisted next to the sources so
//! callers can tell whether a rebuild is needed.
//!
//! # Examples
//!
//! ```
//! use aimap_sync::{
//!     AgentAdapter, AgentRegistry, BuildContext, BuildOrchestrator, BuildParams, Result,
//!     WriteReport,
//! };
//! use std::path::{Path, PathBuf};
//!
//! struct TitlesAdapter;
//!
//! impl AgentAdapter for TitlesAdapter {
//!     fn id(&self) -> &str {
//!         "titles"
//!     }
//!
//!     fn display_name(&self) -> &str {
//!         "Rule titles"
//!     }
//!
//!     fn output_paths(&self) -> Vec<PathBuf> {
//!         vec![PathBuf::from("TITLES.txt")]
//!     }
//!
//!     fn build(&self, ctx: &BuildContext) -> Result<WriteReport> {
//!         let titles: Vec<&str> = ctx
//!             .files
//!             .iter()
//!             .filter_map(|f| f.title.as_deref())
//!             .collect();
//!         let mut report = WriteReport::default();
//!         ctx.write_file(&mut report, Path::new("TITLES.txt"), &titles.join("\n"))?;
//!         Ok(report)
//!     }
//! }
//!
//! let project = tempfile::tempdir().unwrap();
//! std::fs::create_dir(project.path().join(".rules")).unwrap();
//! std::fs::write(project.path().join(".rules/01-style.md"), "# Style\n").unwrap();
//!
//! let mut registry = AgentRegistry::new();
//! registry.register(Box::new(TitlesAdapter));
//!
//! let report = BuildOrchestrator::new(
//!     &registry,
//!     BuildParams {
//!         root: project.path().to_path_buf(),
//!         ..Default::default()
//!     },
//! )
//! .build()
//! .unwrap();
//!
//! assert!(report.success);
//! assert_eq!(
//!     std::fs::read_to_string(project.path().join("TITLES.txt")).unwrap(),
//!     "Style"
//! );
//! ```

#![deny(unsafe_code)]

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub mod adapters;
pub mod error;
pub mod fingerprint;
pub mod metadata;
pub mod orchestrator;
pub mod registry;
pub mod report;
pub mod rules;

pub use adapters::{builtin_adapters, AgentAdapter, BuildContext, OutputOverrides};
pub use error::BuildError;
pub use fingerprint::{
    compare, compute_fingerprint, persist_fingerprint, read_stored_fingerprint, HashComparison,
    BUILD_HASH_FILE,
};
pub use metadata::META_FILE;
pub use orchestrator::{BuildOrchestrator, BuildParams, DEFAULT_SOURCE_DIR};
pub use registry::AgentRegistry;
pub use report::{AgentReport, AgentStatus, BuildReport, BuildWarning, SkipReason, WriteReport};
pub use rules::{load_rule_files, RuleFile};
