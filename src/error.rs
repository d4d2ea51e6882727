//! Error types for the analytics-event-gen crate.

use std::path::PathBuf;

/// Errors that can occur while generating event sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to read the schema document from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The schema document failed to parse.
    #[error("failed to parse schema YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to write generated source files.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
