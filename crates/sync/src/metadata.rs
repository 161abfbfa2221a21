//! Opportunistic build stamp on the source metadata document.

use crate::Result;
use anyhow::Context;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

/// Metadata document inside the source directory.
pub const META_FILE: &str = "00-meta.yaml";

/// Sets `build_timestamp` and `build_hash` on an existing metadata document.
///
/// Returns the rendered document, or `None` when there is nothing to stamp:
/// the document is absent, or its top level is not a mapping. The file is
/// never created here, and nothing is written in dry-run mode.
pub fn stamp_metadata(
    source_dir: &Path,
    fingerprint: &str,
    now: OffsetDateTime,
    dry_run: bool,
) -> Result<Option<String>> {
    let path = source_dir.join(META_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let text = fs::read_to_string(&path)
        .with_context(|| format!("failed to read metadata: {}", path.display()))?;
    let mut meta = match serde_yaml::from_str::<Value>(&text) {
        Ok(Value::Mapping(map)) => map,
        Ok(Value::Null) => Mapping::new(),
        Ok(_) => {
            tracing::warn!(
                path = %path.display(),
                "Metadata is not a mapping, leaving it untouched"
            );
            return Ok(None);
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "Failed to parse metadata, leaving it untouched"
            );
            return Ok(None);
        }
    };

    let timestamp = now.format(&Rfc3339).context("failed to format build timestamp")?;
    meta.insert("build_timestamp".into(), Value::String(timestamp));
    meta.insert("build_hash".into(), Value::String(fingerprint.to_string()));
    let rendered = serde_yaml::to_string(&meta).context("failed to serialize metadata")?;

    if !dry_run {
        fs::write(&path, &rendered)
            .with_context(|| format!("failed to write metadata: {}", path.display()))?;
        let short = fingerprint.get(..8).unwrap_or(fingerprint);
        tracing::info!(hash = %short, "Metadata updated");
    }
    Ok(Some(rendered))
}
