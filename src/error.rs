// src/error.rs
//! Error taxonomy for configuration loading and lookup.
//!
//! Two layers:
//! - [`ValidationError`] is raised per source record. The loader logs it and
//!   skips that record; it never aborts a load.
//! - [`ConfigError`] aborts a load (missing/unreadable/malformed document) or
//!   reports a failed lookup on an already-built config.

use std::path::PathBuf;

/// A single source record violates one of the source invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("source name is required")]
    EmptyName,

    #[error("url is required for source: {name}")]
    EmptyUrl { name: String },

    #[error("invalid source type '{kind}' for {name}")]
    InvalidKind { name: String, kind: String },

    #[error("poll interval too short for {name} ({interval}s, min {min} seconds)")]
    PollIntervalTooShort { name: String, interval: i64, min: u64 },

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("malformed source record: {0}")]
    Malformed(String),
}

/// Fatal load failures plus lookup misses.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("source not found: {0}")]
    SourceNotFound(String),
}

/// Underlying parser failure, by document format.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Path of the document involved, if the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ConfigError::NotFound { path }
            | ConfigError::Io { path, .. }
            | ConfigError::Parse { path, .. } => Some(path),
            ConfigError::SourceNotFound(_) => None,
        }
    }
}
