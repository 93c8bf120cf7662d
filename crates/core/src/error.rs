#![forbid(unsafe_code)]

use std::process::ExitStatus;

/// Errors surfaced by the image listing pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ImagesError {
    #[error("Invalid regex pattern ({pattern:?})")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Failed to start {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Execute command error: {status}, {output}")]
    Command { status: ExitStatus, output: String },
    #[error("Failed to marshal JSON data, error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to marshal YAML data, error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type ImagesResult<T> = Result<T, ImagesError>;
