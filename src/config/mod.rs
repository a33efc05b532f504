// src/config/mod.rs
//! Configuration aggregate.
//!
//! Four documents are read from one directory (`sources`, `keywords`,
//! `routing`, `thresholds`), each as `<stem>.toml` or `<stem>.json`. Each document is
//! load-or-fail; individual source records are best-effort. The result is
//! read-only: to pick up changes, build a new [`Config`] (see
//! [`crate::handle::ConfigHandle`]).

mod document;
pub mod keywords;
pub mod routing;
pub mod settings;
pub mod thresholds;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::ConfigError;
use crate::registry::{SkippedSource, SourceRegistry};
use crate::source::{Source, SourceKind};

pub use keywords::KeywordFilter;
pub use routing::RouteConfig;
pub use settings::Settings;
pub use thresholds::{GeoFilter, Thresholds};

// --- directory defaults & env names ---
pub const DEFAULT_CONFIG_DIR: &str = "config";
pub const ENV_CONFIG_DIR: &str = "TCG_CONFIG_DIR";

pub const SOURCES_DOC: &str = "sources";
pub const KEYWORDS_DOC: &str = "keywords";
pub const ROUTING_DOC: &str = "routing";
pub const THRESHOLDS_DOC: &str = "thresholds";

/// Sources are kept as raw values so each entry can fail on its own.
#[derive(Debug, Default, Deserialize)]
struct SourcesDocument {
    #[serde(default)]
    sources: Vec<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct Config {
    config_dir: PathBuf,
    sources: SourceRegistry,
    skipped: Vec<SkippedSource>,
    keywords: KeywordFilter,
    routing: BTreeMap<String, RouteConfig>,
    thresholds: Thresholds,
    settings: Settings,
}

/// `$TCG_CONFIG_DIR`, else `./config`.
pub fn default_config_dir() -> PathBuf {
    std::env::var(ENV_CONFIG_DIR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
}

/// Load from `dir` (or the default directory) with settings from the environment.
pub fn load_config(dir: Option<&Path>) -> Result<Config, ConfigError> {
    Config::load(dir)
}

impl Config {
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(dir, Settings::from_env())
    }

    /// Load with explicitly supplied settings; does not touch the environment
    /// unless `dir` is `None`.
    pub fn load_with(dir: Option<&Path>, settings: Settings) -> Result<Self, ConfigError> {
        let config_dir = dir.map(Path::to_path_buf).unwrap_or_else(default_config_dir);

        let sources_doc: SourcesDocument = document::load(&config_dir, SOURCES_DOC)?;
        let (sources, skipped) = SourceRegistry::from_entries(sources_doc.sources);

        let keywords: keywords::KeywordsDocument = document::load(&config_dir, KEYWORDS_DOC)?;
        let routing: routing::RoutingDocument = document::load(&config_dir, ROUTING_DOC)?;
        let thresholds: Thresholds = document::load(&config_dir, THRESHOLDS_DOC)?;

        let cfg = Self {
            config_dir,
            sources,
            skipped,
            keywords: keywords.into(),
            routing: routing.routing,
            thresholds: thresholds.sanitize(),
            settings,
        };

        info!(
            target: "config",
            dir = %cfg.config_dir.display(),
            sources = cfg.sources.len(),
            enabled = cfg.sources.enabled().len(),
            skipped = cfg.skipped.len(),
            allowlist = cfg.keywords.allowlist().len(),
            blocklist = cfg.keywords.blocklist().len(),
            routes = cfg.routing.len(),
            "configuration loaded"
        );

        Ok(cfg)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    /// Source records rejected during load, in document order.
    pub fn skipped_sources(&self) -> &[SkippedSource] {
        &self.skipped
    }

    pub fn keywords(&self) -> &KeywordFilter {
        &self.keywords
    }

    pub fn routing(&self) -> &BTreeMap<String, RouteConfig> {
        &self.routing
    }

    pub fn route(&self, alert_type: &str) -> Option<&RouteConfig> {
        self.routing.get(alert_type)
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn enabled_sources(&self) -> Vec<&Source> {
        self.sources.enabled()
    }

    /// First source named `name`, in document order.
    pub fn source_by_name(&self, name: &str) -> Result<&Source, ConfigError> {
        self.sources
            .by_name(name)
            .ok_or_else(|| ConfigError::SourceNotFound(name.to_string()))
    }

    pub fn sources_by_type(&self, kind: SourceKind) -> Vec<&Source> {
        self.sources.by_kind(kind)
    }

    /// Seconds; 0 means no cooldown.
    pub fn cooldown(&self, alert_type: &str) -> u64 {
        self.thresholds.cooldown(alert_type)
    }

    /// Is `text` relevant? Blocklist vetoes, allowlist accepts, default reject.
    pub fn has_keyword_match(&self, text: &str) -> bool {
        self.keywords.matches(text)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config(sources={}, enabled={})",
            self.sources.len(),
            self.sources.enabled().len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_docs(dir: &Path, sources: &str) {
        fs::write(dir.join("sources.toml"), sources).unwrap();
        fs::write(
            dir.join("keywords.toml"),
            "allowlist = [\"Booster Box\", \"ETB\"]\nblocklist = [\"Funko\"]\n",
        )
        .unwrap();
        fs::write(dir.join("routing.toml"), "[routing.stock_in]\ntelegram = true\n").unwrap();
        fs::write(dir.join("thresholds.toml"), "[cooldowns]\nstock_in = 3600\n").unwrap();
    }

    #[test]
    fn loads_and_summarises() {
        let dir = tempfile::tempdir().unwrap();
        write_docs(
            dir.path(),
            r#"
[[sources]]
name = "a"
type = "retail_category"
url = "https://a"
parser_key = "a"
poll_interval = 300

[[sources]]
name = "b"
type = "event_list"
url = "https://b"
parser_key = "b"
poll_interval = 600
enabled = false
"#,
        );

        let cfg = Config::load_with(Some(dir.path()), Settings::default()).unwrap();
        assert_eq!(cfg.to_string(), "Config(sources=2, enabled=1)");
        assert_eq!(cfg.config_dir(), dir.path());
        assert!(cfg.skipped_sources().is_empty());
        assert_eq!(cfg.cooldown("stock_in"), 3600);
        assert!(cfg.route("stock_in").is_some_and(|r| r.telegram));
        assert!(cfg.has_keyword_match("etb bundle"));
    }

    #[test]
    fn empty_sources_document_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        write_docs(dir.path(), "");
        let cfg = Config::load_with(Some(dir.path()), Settings::default()).unwrap();
        assert!(cfg.sources().is_empty());
        assert!(matches!(
            cfg.source_by_name("anything"),
            Err(ConfigError::SourceNotFound(n)) if n == "anything"
        ));
    }
}
