//! Content fingerprinting and staleness detection.
//!
//! The fingerprint is a SHA-256 digest over the raw content of every rule
//! file, fed in name order into a single hasher. File names never enter the
//! digest, but they decide the order, so a rename that reorders files
//! changes it.

use crate::rules::{load_rule_files, RuleFile};
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the sidecar file inside the source directory.
pub const BUILD_HASH_FILE: &str = ".build_hash";

/// Result of comparing the current rule set against the persisted sidecar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashComparison {
    pub computed: String,
    pub stored: Option<String>,
    pub needs_build: bool,
}

/// Computes the lowercase hex SHA-256 digest of the rule contents, in list order.
pub fn compute_fingerprint(files: &[RuleFile]) -> String {
    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.content.as_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Location of the sidecar for `source_dir`.
pub fn sidecar_path(source_dir: &Path) -> PathBuf {
    source_dir.join(BUILD_HASH_FILE)
}

/// Reads the persisted fingerprint.
///
/// A missing, unreadable or blank sidecar reads as `None`.
pub fn read_stored_fingerprint(source_dir: &Path) -> Option<String> {
    let path = sidecar_path(source_dir);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(
                    path = %path.display(),
                    error = %err,
                    "Ignoring unreadable build hash"
                );
            }
            None
        }
    }
}

/// Overwrites the sidecar with `fingerprint`.
pub fn persist_fingerprint(source_dir: &Path, fingerprint: &str) -> Result<()> {
    let path = sidecar_path(source_dir);
    fs::write(&path, fingerprint)
        .with_context(|| format!("failed to write build hash: {}", path.display()))
}

/// Compares a freshly computed fingerprint with the stored one. Never writes.
pub fn compare(source_dir: &Path) -> Result<HashComparison> {
    let files = load_rule_files(source_dir)?;
    let computed = compute_fingerprint(&files);
    let stored = read_stored_fingerprint(source_dir);
    let needs_build = stored.as_deref() != Some(computed.as_str());
    Ok(HashComparison {
        computed,
        stored,
        needs_build,
    })
}
