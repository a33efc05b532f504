// src/lib.rs
// Public library surface for the collectors, decision engine and notifiers.

pub mod config;
pub mod error;
pub mod handle;
pub mod logging;
pub mod registry;
pub mod source;

// ---- Re-exports for stable public API ----
pub use crate::config::{
    load_config, Config, GeoFilter, KeywordFilter, RouteConfig, Settings, Thresholds,
};
pub use crate::error::{ConfigError, ValidationError};
pub use crate::handle::ConfigHandle;
pub use crate::registry::{SkippedSource, SourceRegistry};
pub use crate::source::{Source, SourceKind, MIN_POLL_INTERVAL_SECS};
