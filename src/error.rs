//! Error types for schema loading and type generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a generation run.
///
/// Schema oddities never show up here: they degrade to `unknown` and are
/// reported through a [`DiagnosticSink`](crate::DiagnosticSink) instead.
#[derive(Debug, Error)]
pub enum GenerateError {
    // IO errors (exit code 3)
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "remote")]
    #[error("failed to fetch {url}: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("remote sources are not supported in this build: {url}")]
    RemoteDisabled { url: String },

    // Data errors (exit code 2)
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected shape of {what}: {source}")]
    InvalidDocument {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("OpenAPI conversion failed: {message}")]
    Converter { message: String },

    // Strict mode (exit code 1)
    #[error("{count} warning(s) reported in strict mode")]
    StrictWarnings { count: usize },
}

impl GenerateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::FileNotFound { .. }
            | GenerateError::ReadError { .. }
            | GenerateError::WriteError { .. }
            | GenerateError::RemoteDisabled { .. } => 3,
            #[cfg(feature = "remote")]
            GenerateError::NetworkError { .. } => 3,
            GenerateError::StrictWarnings { .. } => 1,
            _ => 2,
        }
    }
}
