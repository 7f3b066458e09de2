//! Errors at the crate's I/O boundaries.
//!
//! Rendering itself is total; only loading a dataset and serializing
//! fragments to HTML can fail.

use std::path::PathBuf;

/// Failure to load or validate a resume dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON resume: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML resume: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unsupported resume format '{extension}' (expected json, yaml or yml)")]
    UnsupportedFormat { extension: String },

    #[error("invalid resume: {0}")]
    Invalid(String),
}

/// Failure to serialize a fragment tree.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
