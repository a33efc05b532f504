// src/handle.rs
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::config::{Config, Settings};
use crate::error::ConfigError;

/// A cloneable handle to the current configuration.
///
/// Readers take an `Arc<Config>` snapshot and keep using it for as long as
/// they like. A reload builds a whole new `Config` first and only then swaps
/// the pointer, so nobody ever sees a half-loaded config.
#[derive(Clone)]
pub struct ConfigHandle {
    inner: Arc<RwLock<Arc<Config>>>,
}

impl ConfigHandle {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    /// Current snapshot.
    pub fn current(&self) -> Arc<Config> {
        // The guarded value is a plain Arc; a poisoned lock still holds a valid one.
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in an already-built config, returning the previous snapshot.
    pub fn replace(&self, config: Config) -> Arc<Config> {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(config))
    }

    /// Load a fresh config from the current snapshot's directory and swap it in.
    /// On failure the current snapshot stays in place and the error is returned.
    pub fn reload(&self) -> Result<Arc<Config>, ConfigError> {
        let current = self.current();
        self.reload_from(current.config_dir(), current.settings().clone())
    }

    /// Like [`reload`](Self::reload) but from an explicit directory and settings.
    pub fn reload_from(&self, dir: &Path, settings: Settings) -> Result<Arc<Config>, ConfigError> {
        match Config::load_with(Some(dir), settings) {
            Ok(fresh) => {
                info!(target: "config", dir = %dir.display(), %fresh, "configuration swapped");
                self.replace(fresh);
                Ok(self.current())
            }
            Err(e) => {
                warn!(target: "config", dir = %dir.display(), error = %e, "reload failed; keeping current configuration");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SOURCE: &str = r#"
[[sources]]
name = "first"
type = "event_list"
url = "https://first"
parser_key = "p"
poll_interval = 600
"#;

    fn seed(dir: &Path) {
        fs::write(dir.join("sources.toml"), SOURCE).unwrap();
        fs::write(dir.join("keywords.toml"), "allowlist = [\"etb\"]").unwrap();
        fs::write(dir.join("routing.toml"), "").unwrap();
        fs::write(dir.join("thresholds.toml"), "").unwrap();
    }

    #[test]
    fn reload_swaps_and_old_snapshot_survives() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path());
        let handle = ConfigHandle::new(Config::load_with(Some(dir.path()), Settings::default()).unwrap());
        let before = handle.current();

        let second = SOURCE.replace("first", "second");
        fs::write(dir.path().join("sources.toml"), format!("{SOURCE}{second}")).unwrap();
        let after = handle.reload().unwrap();

        assert_eq!(before.sources().len(), 1);
        assert_eq!(after.sources().len(), 2);
        assert_eq!(handle.current().sources().len(), 2);
    }

    #[test]
    fn failed_reload_keeps_current() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path());
        let handle = ConfigHandle::new(Config::load_with(Some(dir.path()), Settings::default()).unwrap());

        fs::remove_file(dir.path().join("keywords.toml")).unwrap();
        assert!(matches!(handle.reload(), Err(ConfigError::NotFound { .. })));
        assert!(handle.current().has_keyword_match("ETB"));
    }

    #[test]
    fn clones_share_state() {
        let dir = tempfile::tempdir().unwrap();
        seed(dir.path());
        let cfg = Config::load_with(Some(dir.path()), Settings::default()).unwrap();
        let a = ConfigHandle::new(cfg.clone());
        let b = a.clone();

        fs::write(dir.path().join("keywords.toml"), "allowlist = [\"booster\"]").unwrap();
        let fresh = Config::load_with(Some(dir.path()), Settings::default()).unwrap();
        let old = a.replace(fresh);

        assert!(old.has_keyword_match("etb"));
        assert!(b.current().has_keyword_match("booster"));
        assert!(!b.current().has_keyword_match("etb"));
    }
}
