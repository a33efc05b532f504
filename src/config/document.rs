// src/config/document.rs
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ParseError};

/// Supported document formats, in lookup order.
const EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Resolve `<stem>.toml`, then `<stem>.json`, inside `dir`.
/// Neither present -> `NotFound` naming the TOML path.
pub(crate) fn resolve(dir: &Path, stem: &str) -> Result<PathBuf, ConfigError> {
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|p| p.is_file())
        .ok_or_else(|| ConfigError::NotFound {
            path: dir.join(format!("{stem}.{}", EXTENSIONS[0])),
        })
}

/// Read and decode one document. Format is picked by extension.
pub(crate) fn load<T: DeserializeOwned>(dir: &Path, stem: &str) -> Result<T, ConfigError> {
    let path = resolve(dir, stem)?;
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    debug!(target: "config", path = %path.display(), bytes = content.len(), "read config document");

    parse(&path, &content).map_err(|source| ConfigError::Parse { path, source })
}

fn parse<T: DeserializeOwned>(path: &Path, content: &str) -> Result<T, ParseError> {
    let is_json = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(serde_json::from_str(content)?)
    } else {
        Ok(toml::from_str(content)?)
    }
}
