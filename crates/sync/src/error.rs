//! Fatal build errors.
//!
//! Only the checks that run before any file is written can abort a build.
//! Everything that goes wrong afterwards is recorded in the
//! [`BuildReport`](crate::BuildReport) instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a build before any output is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    /// The configured source directory is missing or is not a directory.
    #[error("Source directory {} does not exist", path.display())]
    SourceNotFound {
        /// The source directory, resolved against the project root.
        path: PathBuf,
    },

    /// The source directory holds no `.md`, `.yaml` or `.yml` files.
    #[error("No rule files found in {}", path.display())]
    NoRuleFiles {
        /// The source directory, resolved against the project root.
        path: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_directory() {
        let missing = BuildError::SourceNotFound {
            path: PathBuf::from("non-existent-dir"),
        };
        assert_eq!(
            missing.to_string(),
            "Source directory non-existent-dir does not exist"
        );

        let empty = BuildError::NoRuleFiles {
            path: PathBuf::from(".rules"),
        };
        assert_eq!(empty.to_string(), "No rule files found in .rules");
    }
}
